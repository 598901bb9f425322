use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("Unknown mouse button `{0}`")]
    UnknownButton(String),
    #[error("Could not parse layout: {0}")]
    ParseLayout(String),
}
