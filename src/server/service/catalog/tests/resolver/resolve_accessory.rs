use super::*;

/// Expect an ACCESSORY identity to be created on first sight
#[tokio::test]
async fn creates_accessory_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);
    let result = resolver.resolve(&accessory_item("Playmat")).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    assert_eq!(test.catalog().count_item_infos().await?, 1);
    assert_eq!(test.catalog().count_accessory_infos().await?, 1);

    Ok(())
}

/// Expect repeated resolutions of the same accessory name to reuse the
/// identity
#[tokio::test]
async fn reuses_accessory_identity_by_name() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);

    let first = resolver.resolve(&accessory_item("Playmat")).await?;
    let second = resolver.resolve(&accessory_item("Playmat")).await?;

    assert_eq!(first, second);
    assert_eq!(test.catalog().count_item_infos().await?, 1);
    assert_eq!(test.catalog().count_accessory_infos().await?, 1);

    Ok(())
}

/// Expect different accessory names to get distinct identities
#[tokio::test]
async fn distinct_names_get_distinct_identities() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);

    let playmat = resolver.resolve(&accessory_item("Playmat")).await?;
    let sleeves = resolver.resolve(&accessory_item("Sleeves")).await?;

    assert_ne!(playmat, sleeves);

    Ok(())
}

/// Expect InvalidItemShape for an ACCESSORY item without its payload
#[tokio::test]
async fn rejects_accessory_item_without_payload() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let item = CreateListingItemDto {
        info_id: None,
        listing_image_id: None,
        detail: None,
        condition: None,
        quantity: 1,
        price_per_unit: 1000,
        payload: ItemPayloadDto::Accessory {
            accessory_info: None,
        },
    };

    let resolver = ItemResolver::new(&test.state.db);
    let result = resolver.resolve(&item).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::InvalidItemShape(_)))
    ));

    Ok(())
}
