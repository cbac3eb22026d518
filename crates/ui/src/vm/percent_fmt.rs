use folio_core::progress::LoadProgress;

#[must_use]
pub fn percent_label(progress: LoadProgress) -> String {
    format!("{}% Complete", progress.percent())
}
