use std::cmp::Ordering;

use crate::model::{Album, AlbumId, SortDirection, SortField, SortSpec};

/// Order albums by a user-supplied field name.
///
/// `field` is resolved with [`SortField::parse`]. An unrecognized field is not
/// an error: the albums come back in their original order.
pub fn sort_albums(albums: &[Album], field: &str, ascending: bool) -> Vec<Album> {
    sort_by_spec(albums, &SortSpec::parse(field, ascending))
}

/// Order albums according to a resolved [`SortSpec`].
///
/// The input is never reordered in place. The sort is stable in both
/// directions: descending flips the comparator, not the output, so albums
/// with equal keys keep their input order.
pub fn sort_by_spec(albums: &[Album], spec: &SortSpec) -> Vec<Album> {
    let mut sorted = albums.to_vec();

    let Some(field) = spec.field else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    sorted
}

// Text keys use ordinal `str` ordering, no locale folding.
fn compare_by(field: SortField, a: &Album, b: &Album) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Artist => a.artist.cmp(&b.artist),
        SortField::Price => a.price.total_cmp(&b.price),
    }
}

pub fn find_by_id(albums: &[Album], id: AlbumId) -> Option<&Album> {
    albums.iter().find(|album| album.id == id)
}
