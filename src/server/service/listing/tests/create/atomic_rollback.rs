use super::*;

/// Expect a failing item in the middle of a submission to leave no trace:
/// no listing, no items, and no catalog rows from the items that resolved
/// before the failure
#[tokio::test]
async fn invalid_second_item_rolls_back_everything() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);
    let result = listing_service
        .create_listing(listing_dto(
            vec![
                accessory_item("Playmat"),
                invalid_card_item(),
                candidate_card_item("Foo", Rarity::Ul),
            ],
            Vec::new(),
        ))
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::InvalidItemShape(_)))
    ));

    assert_eq!(test.listing().count_listings().await?, 0);
    assert_eq!(test.listing().count_listing_items().await?, 0);
    // The first item's catalog rows rolled back with the listing
    assert_eq!(test.catalog().count_item_infos().await?, 0);
    assert_eq!(test.catalog().count_accessory_infos().await?, 0);
    assert_eq!(test.catalog().count_candidates().await?, 0);

    Ok(())
}

/// Expect catalog rows from a committed submission to survive a later
/// failing one
#[tokio::test]
async fn committed_catalog_rows_survive_later_failures() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);

    listing_service
        .create_listing(listing_dto(vec![accessory_item("Playmat")], Vec::new()))
        .await?;

    let result = listing_service
        .create_listing(listing_dto(
            vec![accessory_item("Sleeves"), invalid_card_item()],
            Vec::new(),
        ))
        .await;
    assert!(result.is_err());

    // The first submission's rows are untouched; the failed one's are gone
    assert_eq!(test.listing().count_listings().await?, 1);
    assert_eq!(test.catalog().count_accessory_infos().await?, 1);

    Ok(())
}
