//! Error types for ezmenu-stanza

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] ezmenu_fs::Error),

    #[error("Cannot inject into stanza \"{title}\": no injection target given and none remembered")]
    MissingInjectionTarget { title: String },

    #[error("Stanza \"{title}\" rendered before injection was applied")]
    InjectionNotYetApplied { title: String },
}
