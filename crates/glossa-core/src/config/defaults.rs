use crate::language::LanguageCode;

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_fallback_language() -> LanguageCode {
    LanguageCode::english()
}
