//! Process-wide plural data.
//!
//! Plural data is installed once at startup and read by
//! [`IString::format_choice`](crate::IString::format_choice). Until data is
//! installed every language uses the built-in default rules.

use std::sync::{Arc, LazyLock, RwLock};

use tracing::debug;

use crate::plural::PluralData;

static GLOBAL_PLURALS: LazyLock<RwLock<Arc<PluralData>>> =
    LazyLock::new(|| RwLock::new(Arc::new(PluralData::new())));

/// Replaces the process-wide plural data.
pub fn set_plural_data(data: PluralData) {
    debug!(languages = data.len(), "Installing global plural data");
    let mut guard = GLOBAL_PLURALS
        .write()
        .expect("global plural data lock poisoned");
    *guard = Arc::new(data);
}

/// Returns a shared handle to the process-wide plural data.
pub fn plural_data() -> Arc<PluralData> {
    let guard = GLOBAL_PLURALS
        .read()
        .expect("global plural data lock poisoned");
    Arc::clone(&guard)
}
