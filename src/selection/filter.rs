use crate::constants::ALL_CATEGORIES;
use crate::data::university::PointOfInterest;
use std::borrow::Cow;

/// Keeps the points whose category equals `category` exactly.
///
/// `"All"` hands the input back untouched (borrowed). An unknown category
/// yields an empty result.
pub fn filter_by_category<'a>(
    pois: &'a [PointOfInterest],
    category: &str,
) -> Cow<'a, [PointOfInterest]> {
    if category == ALL_CATEGORIES {
        return Cow::Borrowed(pois);
    }

    Cow::Owned(
        pois.iter()
            .filter(|poi| poi.category == category)
            .cloned()
            .collect(),
    )
}
