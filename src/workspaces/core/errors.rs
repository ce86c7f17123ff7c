use thiserror::Error;

pub const MAX_WORKSPACE_NAME_LENGTH: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceCoreError {
    #[error("Workspace identifier cannot be empty.")]
    IdCannotBeEmpty,

    #[error("Workspace name cannot be empty.")]
    NameCannotBeEmpty,

    #[error("Workspace name '{name}' is too long. Max length: {max_len}, actual: {actual_len}.")]
    NameTooLong {
        name: String,
        max_len: usize,
        actual_len: usize,
    },
}
