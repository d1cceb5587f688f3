//! Resources to manipulate the folders of the drive.

pub mod create;
pub mod delete;
pub mod list;
pub mod rename;

/// A folder as reported by the api.
///
/// This is a snapshot of the server state at the time of the answer, nothing
/// keeps it in sync afterwards.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    /// Identifier of the folder.
    #[serde(default)]
    pub id: String,
    /// Title of the folder.
    pub title: String,
    /// Time of the last change, when the api reports it.
    pub updated_on: Option<chrono::DateTime<chrono::Utc>>,
    /// Number of items the folder contains.
    #[serde(default)]
    pub items_count: u64,
}
