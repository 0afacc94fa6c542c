use super::*;

/// Expect a full listing with one card item backed by a fresh candidate
#[tokio::test]
async fn creates_listing_with_candidate_card_item() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let listing_service = ListingService::new(&test.state.db);
    let result = listing_service
        .create_listing(listing_dto(
            vec![candidate_card_item("Foo", Rarity::Ul)],
            Vec::new(),
        ))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let view = result.unwrap();

    assert_eq!(view.title, "t");
    assert_eq!(view.seller_id, 1);
    // Status defaults to ON_SALE when the submission omits it
    assert_eq!(view.status, ListingStatus::OnSale);
    assert_eq!(view.items.len(), 1);
    assert!(view.images.is_empty());

    let item = &view.items[0];
    assert_eq!(item.listing_id, view.id);
    assert_eq!(item.quantity, 1);
    assert_eq!(item.price_per_unit, 1000);

    let card_info = item.item_info.card_info.as_ref().expect("card details");
    assert_eq!(card_info.rarity, Rarity::Ul);
    let candidate = card_info.candidate.as_ref().expect("candidate");
    assert_eq!(candidate.name, "Foo");

    // One candidate and one card identity exist for "Foo"
    assert_eq!(test.catalog().count_candidates().await?, 1);
    assert_eq!(test.catalog().count_card_infos().await?, 1);

    Ok(())
}

/// Expect an explicit status to be stored instead of the default
#[tokio::test]
async fn honors_submitted_status() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let mut dto = listing_dto(vec![accessory_item("Playmat")], Vec::new());
    dto.status = Some(ListingStatus::Sold);

    let listing_service = ListingService::new(&test.state.db);
    let view = listing_service.create_listing(dto).await?;

    assert_eq!(view.status, ListingStatus::Sold);

    Ok(())
}

/// Expect an item with a pre-resolved info id to link without creating
/// catalog rows
#[tokio::test]
async fn links_pre_resolved_info_id() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (info, _) = test.catalog().insert_accessory_identity("Playmat").await?;

    let mut item = accessory_item("ignored");
    item.info_id = Some(info.id);
    item.payload = ItemPayloadDto::Accessory {
        accessory_info: None,
    };

    let listing_service = ListingService::new(&test.state.db);
    let view = listing_service
        .create_listing(listing_dto(vec![item], Vec::new()))
        .await?;

    assert_eq!(view.items[0].info_id, info.id);
    assert_eq!(test.catalog().count_item_infos().await?, 1);

    Ok(())
}
