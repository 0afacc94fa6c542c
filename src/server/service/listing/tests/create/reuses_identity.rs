use super::*;

/// Expect a second, independent submission of the same candidate item to
/// resolve to the same identity with no duplicate catalog rows
#[tokio::test]
async fn second_submission_reuses_card_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);

    let first = listing_service
        .create_listing(listing_dto(
            vec![candidate_card_item("Foo", Rarity::Ul)],
            Vec::new(),
        ))
        .await?;
    let second = listing_service
        .create_listing(listing_dto(
            vec![candidate_card_item("Foo", Rarity::Ul)],
            Vec::new(),
        ))
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.items[0].info_id, second.items[0].info_id);

    assert_eq!(test.catalog().count_candidates().await?, 1);
    assert_eq!(test.catalog().count_card_infos().await?, 1);
    assert_eq!(test.listing().count_listings().await?, 2);

    Ok(())
}

/// Expect two submissions of the same accessory name to share one
/// ACCESSORY identity
#[tokio::test]
async fn second_submission_reuses_accessory_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);

    let first = listing_service
        .create_listing(listing_dto(vec![accessory_item("Playmat")], Vec::new()))
        .await?;
    let second = listing_service
        .create_listing(listing_dto(vec![accessory_item("Playmat")], Vec::new()))
        .await?;

    assert_eq!(first.items[0].info_id, second.items[0].info_id);

    assert_eq!(test.catalog().count_accessory_infos().await?, 1);
    assert_eq!(test.catalog().count_item_infos().await?, 1);

    Ok(())
}

/// Expect one listing with duplicate items to resolve both to one identity
#[tokio::test]
async fn duplicate_items_in_one_submission_share_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);
    let view = listing_service
        .create_listing(listing_dto(
            vec![
                candidate_card_item("Foo", Rarity::Ul),
                candidate_card_item("Foo", Rarity::Ul),
            ],
            Vec::new(),
        ))
        .await?;

    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].info_id, view.items[1].info_id);
    assert_eq!(test.catalog().count_card_infos().await?, 1);

    Ok(())
}
