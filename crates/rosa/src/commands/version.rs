use crate::output;

pub(crate) fn handle_version_command() {
    output::plain(env!("CARGO_PKG_VERSION"));
}
