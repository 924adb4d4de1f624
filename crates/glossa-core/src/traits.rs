use crate::{error::GlossaError, language::TranslationTable};
use std::path::Path;

/// Resource Parser trait — turns a strings file into key/value pairs.
///
/// Implementations insert into `table`, overwriting keys that already
/// exist. Calling `parse` several times on the same table must be safe,
/// since merged registrations reuse it.
pub trait ResourceParser {
    /// Human-readable parser name.
    fn name(&self) -> &str;

    /// Read `path` and insert every entry into `table`.
    ///
    /// Returns the number of entries read from the file.
    fn parse(&self, path: &Path, table: &mut TranslationTable) -> Result<usize, GlossaError>;
}

/// Locale Provider trait — where the active language comes from.
pub trait LocaleProvider {
    /// The current language code, possibly region-qualified (`"en-US"`).
    fn language(&self) -> String;

    /// The current language in ISO 639-1 form (`"en"`).
    fn iso_language(&self) -> String;
}
