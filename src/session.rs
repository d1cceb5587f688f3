//! Stateful wrapper running the folder commands in sequence.

use crate::client::HttpClient;
use crate::error::Error;
use crate::folder::create::FolderCreateCommand;
use crate::folder::delete::FolderDeleteCommand;
use crate::folder::list::FolderListCommand;
use crate::folder::rename::FolderRenameCommand;
use crate::folder::Folder;
use crate::prelude::HttpCommand;

/// Runs the folder commands while remembering the last created folder.
///
/// The remembered identifier becomes the default target of the following
/// rename and delete calls. It is only a convenience for sequential
/// scenarios, nothing keeps it in sync with changes made elsewhere. The
/// calls that touch the remembered state take `&mut self`, a session serves
/// one caller at a time.
///
/// ```rust,no_run
/// use document360::client::HttpClientBuilder;
/// use document360::session::FolderSession;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env()
///     .build()
///     .expect("couldn't create client");
/// let mut session = FolderSession::new(client);
/// session.create("Reports", None).await.expect("couldn't create the folder");
/// session.rename("Monthly reports", None).await.expect("couldn't rename the folder");
/// session.delete(None).await.expect("couldn't delete the folder");
/// # })
/// ```
pub struct FolderSession {
    client: HttpClient,
    current_folder_id: Option<String>,
}

impl FolderSession {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            current_folder_id: None,
        }
    }

    /// Identifier of the last folder created through this session, if any.
    pub fn current_folder_id(&self) -> Option<&str> {
        self.current_folder_id.as_deref()
    }

    /// Fetches all the folders of the drive.
    pub async fn list(&self) -> Result<Vec<Folder>, Error> {
        FolderListCommand::new().execute(&self.client).await
    }

    /// Creates a folder and remembers its identifier for the next calls.
    pub async fn create<S: Into<String>>(
        &mut self,
        title: S,
        parent_folder_id: Option<&str>,
    ) -> Result<Folder, Error> {
        let mut cmd = FolderCreateCommand::new(title);
        if let Some(parent_folder_id) = parent_folder_id {
            cmd.set_parent_folder_id(parent_folder_id);
        }
        let folder = cmd.execute(&self.client).await?;
        self.current_folder_id = Some(folder.id.clone());
        Ok(folder)
    }

    /// Renames a folder, explicit identifier first, remembered one otherwise.
    ///
    /// Fails with [`Error::MissingFolderId`](crate::error::Error) before
    /// reaching the api when no identifier is available. Renaming never
    /// changes the remembered identifier.
    pub async fn rename<S: Into<String>>(
        &self,
        title: S,
        folder_id: Option<&str>,
    ) -> Result<Folder, Error> {
        let folder_id = folder_id
            .or_else(|| self.current_folder_id.as_deref())
            .ok_or(Error::MissingFolderId)?;
        FolderRenameCommand::new(folder_id, title)
            .execute(&self.client)
            .await
    }

    /// Deletes a folder, explicit identifier first, remembered one otherwise.
    ///
    /// Fails with [`Error::MissingFolderId`](crate::error::Error) before
    /// reaching the api when no identifier is available. A successful
    /// deletion forgets the remembered identifier.
    pub async fn delete(&mut self, folder_id: Option<&str>) -> Result<bool, Error> {
        let folder_id = folder_id
            .or_else(|| self.current_folder_id.as_deref())
            .ok_or(Error::MissingFolderId)?
            .to_string();
        let deleted = FolderDeleteCommand::new(folder_id)
            .execute(&self.client)
            .await?;
        self.current_folder_id = None;
        Ok(deleted)
    }
}
