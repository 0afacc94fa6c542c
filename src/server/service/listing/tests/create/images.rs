use super::*;

/// Expect unattached images to be claimed and returned in display order
#[tokio::test]
async fn claims_unattached_images() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let second = test.listing().insert_unattached_image("b.jpg", Some(1)).await?;
    let first = test.listing().insert_unattached_image("a.jpg", Some(0)).await?;

    let listing_service = ListingService::new(&test.state.db);
    let view = listing_service
        .create_listing(listing_dto(
            vec![accessory_item("Playmat")],
            vec![first.id, second.id],
        ))
        .await?;

    assert_eq!(view.images.len(), 2);
    assert_eq!(view.images[0].url, "a.jpg");
    assert_eq!(view.images[1].url, "b.jpg");
    assert!(view.images.iter().all(|i| i.listing_id == Some(view.id)));

    Ok(())
}

/// Expect an image owned by another listing to stay where it is while the
/// new listing is still created
#[tokio::test]
async fn never_steals_images_from_other_listings() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let owner = test
        .listing()
        .insert_listing("owner", 7, ListingStatus::OnSale)
        .await?;
    let taken = test
        .listing()
        .insert_image_for(owner.id, "taken.jpg", Some(0))
        .await?;

    let listing_service = ListingService::new(&test.state.db);
    let result = listing_service
        .create_listing(listing_dto(vec![accessory_item("Playmat")], vec![taken.id]))
        .await;

    // A stale image id is not fatal for the creation
    assert!(result.is_ok(), "Error: {:?}", result);
    let view = result.unwrap();
    assert!(view.images.is_empty());

    let taken = test.listing().get_image(taken.id).await?.unwrap();
    assert_eq!(taken.listing_id, Some(owner.id));

    Ok(())
}

/// Expect zero and negative image ids to be ignored
#[tokio::test]
async fn ignores_unusable_image_ids() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);
    let view = listing_service
        .create_listing(listing_dto(vec![accessory_item("Playmat")], vec![0, -1]))
        .await?;

    assert!(view.images.is_empty());

    Ok(())
}
