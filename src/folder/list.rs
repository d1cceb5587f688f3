//! Resources needed to list the folders of the drive.

use crate::client::HttpClient;
use crate::error::Error;
use crate::folder::Folder;
use crate::prelude::HttpCommand;
use crate::response::Envelope;

/// Command to fetch all the folders of the drive.
///
/// The folders are returned in the order the server reports them.
///
/// ```rust,no_run
/// use document360::client::HttpClientBuilder;
/// use document360::folder::list::FolderListCommand;
/// use document360::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env()
///     .build()
///     .expect("couldn't create client");
/// match FolderListCommand::new().execute(&client).await {
///     Ok(folders) => println!("found {} folders", folders.len()),
///     Err(error) => eprintln!("unable to list the folders: {:?}", error),
/// };
/// # })
/// ```
#[derive(Debug, Default)]
pub struct FolderListCommand;

impl FolderListCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl HttpCommand for FolderListCommand {
    type Output = Vec<Folder>;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        let envelope: Envelope<Vec<Folder>> = client.get().await?.accept(&[200])?.decode()?;
        // a missing or null data field means the drive has no folders
        Ok(envelope.data.unwrap_or_default())
    }
}
