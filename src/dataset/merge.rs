use super::options::MergeOptions;
use super::report::{MergeReport, PlacementTally};
use crate::error::{LayoutError, LayoutResult};
use crate::file::link::place;
use crate::file::listing::{list_classes, list_files};
use crate::file::naming::{joined_basename, resolve_base_dir};
use crate::transaction::Transaction;
use std::collections::BTreeMap;
use std::path::Path;

/// Unions same-named class directories of several sources into one tree.
///
/// The class set comes from the first source only: classes that exist only
/// in later sources are skipped, and a class of the first source missing
/// from a later one is a [`LayoutError::Listing`]. Destination files keep
/// their names, so the same file name in two sources of one class fails the
/// second placement.
///
/// Any failure rolls back every directory recorded in `tx`.
pub fn merge<P: AsRef<Path>>(
    tx: &mut Transaction,
    sources: &[P],
    options: &MergeOptions,
) -> LayoutResult<MergeReport> {
    tx.guard(|tx| {
        let first = sources
            .first()
            .ok_or_else(|| LayoutError::invalid("merge needs at least one source directory"))?
            .as_ref();

        let basename = joined_basename(sources, &options.separator);
        let base_dir = resolve_base_dir(first, options.base_dir.as_deref(), &basename);
        tx.create_dir(&base_dir)?;

        let mut classes = BTreeMap::new();
        let mut tally = PlacementTally::default();

        for class in list_classes(first)? {
            let dst_class_dir = base_dir.join(&class);
            tx.create_dir(&dst_class_dir)?;

            let mut placed = 0;
            for source in sources {
                let src_class_dir = source.as_ref().join(&class);
                for file in list_files(&src_class_dir)? {
                    let placement = place(
                        &src_class_dir.join(&file),
                        &dst_class_dir.join(&file),
                        options.place,
                    )?;
                    tally.record(placement);
                    placed += 1;
                }
            }
            classes.insert(class.to_string_lossy().into_owned(), placed);
        }

        tracing::info!(
            "Merged {} sources into {:?} ({} classes, {} files)",
            sources.len(),
            base_dir,
            classes.len(),
            tally.total()
        );

        Ok(MergeReport {
            base_dir,
            classes,
            tally,
        })
    })
}
