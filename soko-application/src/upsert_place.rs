use crate::*;

/// Store a place row and bring both place indices in line.
///
/// The index swap happens after the acknowledged repository write; a
/// reindex failure is logged and retried on the next upsert instead of
/// failing the write (queries degrade to a briefly stale snapshot).
pub fn upsert_place<D>(
    db: &D,
    term_index: &dyn TermIndex,
    facet_index: &dyn PlaceFilterIndex,
    place: Place,
    at: Timestamp,
) -> Result<Place>
where
    D: Db,
{
    let place = usecases::store_place(db, place, at)?;
    if let Err(err) = usecases::reindex_place(term_index, facet_index, &place) {
        log::error!("Failed to reindex place {} after update: {}", place.id, err);
    }
    Ok(place)
}

/// Tombstone a place and drop it from both indices.
pub fn delete_place<D>(
    db: &D,
    term_index: &dyn TermIndex,
    facet_index: &dyn PlaceFilterIndex,
    place_id: &str,
    at: Timestamp,
) -> Result<()>
where
    D: Db,
{
    usecases::delete_place(db, place_id, at)?;
    let id = Id::from(place_id);
    if let Err(err) = term_index
        .remove_entity(&id)
        .and_then(|()| facet_index.remove_place(&id))
    {
        log::error!("Failed to unindex deleted place {id}: {err}");
    }
    Ok(())
}
