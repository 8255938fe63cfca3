//! Asset database tools (`asset-db` channel).

mod asset_copy;
mod asset_create;
mod asset_delete;
mod asset_move;
mod asset_query_info;
mod asset_query_url;
mod asset_query_uuid;
mod asset_reimport;
mod asset_save;
mod asset_search;
mod support;

pub use asset_copy::{AssetCopy, AssetCopyParams};
pub use asset_create::{AssetCreate, AssetCreateParams};
pub use asset_delete::{AssetDelete, AssetDeleteParams};
pub use asset_move::{AssetMove, AssetMoveParams};
pub use asset_query_info::{AssetQueryInfo, AssetQueryInfoParams};
pub use asset_query_url::{AssetQueryUrl, AssetQueryUrlParams};
pub use asset_query_uuid::{AssetQueryUuid, AssetQueryUuidParams};
pub use asset_reimport::{AssetReimport, AssetReimportParams};
pub use asset_save::{AssetSave, AssetSaveParams};
pub use asset_search::{AssetSearch, AssetSearchParams};
pub use support::resolve_uuid;
