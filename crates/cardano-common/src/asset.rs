// SPDX-License-Identifier: GPL-3.0

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use strum_macros::{Display, VariantArray};

/// A family of labels identified by a fixed prefix at the start of a hex-encoded asset name.
pub trait PrefixLabel: Copy + VariantArray + 'static {
	/// The hex-encoded prefix of the label.
	fn prefix(&self) -> &'static str;

	/// Returns the first label, in declaration order, whose prefix starts `asset_name`.
	fn parse(asset_name: &str) -> Option<Self> {
		Self::VARIANTS.iter().copied().find(|label| asset_name.starts_with(label.prefix()))
	}

	/// Returns the asset name without the label prefix, if it carries this label.
	fn strip<'a>(&self, asset_name: &'a str) -> Option<&'a str> {
		asset_name.strip_prefix(self.prefix())
	}
}

/// CIP-67 asset name labels.
///
/// Parsing tries the variants in the order they are declared here and the first match wins.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray, Serialize, Deserialize,
)]
pub enum AssetNameLabel {
	/// Label 100, the CIP-68 reference NFT holding the datum.
	ReferenceNft,
	/// Label 222, a CIP-68 non-fungible user token.
	Nft,
	/// Label 333, a CIP-68 fungible user token.
	FungibleToken,
	/// Label 444, a CIP-68 rich fungible user token.
	RichFungibleToken,
}

impl AssetNameLabel {
	/// The numeric CIP-67 label.
	pub fn label(&self) -> u16 {
		match self {
			AssetNameLabel::ReferenceNft => 100,
			AssetNameLabel::Nft => 222,
			AssetNameLabel::FungibleToken => 333,
			AssetNameLabel::RichFungibleToken => 444,
		}
	}
}

impl PrefixLabel for AssetNameLabel {
	fn prefix(&self) -> &'static str {
		match self {
			AssetNameLabel::ReferenceNft => "000643b0",
			AssetNameLabel::Nft => "000de140",
			AssetNameLabel::FungibleToken => "0014df10",
			AssetNameLabel::RichFungibleToken => "001bc280",
		}
	}
}

/// Parses the CIP-67 label of a hex-encoded asset name.
///
/// # Arguments
/// * `asset_name` - The hex-encoded asset name.
pub fn parse_asset_name_label(asset_name: &str) -> Option<AssetNameLabel> {
	AssetNameLabel::parse(asset_name)
}
