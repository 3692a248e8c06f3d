use arc_swap::ArcSwap;
use parking_lot::Mutex;
use prpcore::protection::ProtectionSource;
use prprules::rules::PropertyRules;
use std::{
    path::PathBuf,
    sync::Arc,
};

/// Builds a [`Platform`] holding the active protection rule table.
///
/// Methods can be chained in order to set the configuration values.
/// The `Platform` is constructed by calling [`build`](Builder::build),
/// which fails if the initial source does not compile; a process must
/// not come up serving traffic under a policy it could not load.
///
/// The source may be provided as an already parsed
/// [`ProtectionSource`], as text, or as a file path; they are consulted
/// in that order.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    source: Option<ProtectionSource>,
    source_text: Option<String>,
    source_path: Option<PathBuf>,
    lenient_keys: bool,
}

/// The holder of the active protection rule table.
///
/// Cloning is cheap and every clone refers to the same table, so a
/// `Platform` can be handed to each request handler.  Readers always
/// observe a complete table: replacement via the reload methods is a
/// single atomic publish, and a failed reload leaves the active table
/// in force.
#[derive(Clone)]
pub struct Platform(Arc<PlatformInner>);

struct PlatformInner {
    active: ArcSwap<PropertyRules>,
    // serializes writers; readers never take this
    reload_lock: Mutex<()>,
    lenient_keys: bool,
}

mod impls;
