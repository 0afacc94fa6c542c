use super::*;

/// Expect a candidate row and a CARD identity when a new candidate name is
/// submitted
#[tokio::test]
async fn creates_candidate_and_card_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);
    let result = resolver
        .resolve(&card_item(Some(candidate_card("Foo", Rarity::Ul))))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);

    assert_eq!(test.catalog().count_candidates().await?, 1);
    assert_eq!(test.catalog().count_card_infos().await?, 1);
    assert_eq!(test.catalog().count_item_infos().await?, 1);

    Ok(())
}

/// Expect repeated resolutions of the same candidate item to yield the same
/// identity and no extra rows
#[tokio::test]
async fn resolves_same_candidate_item_to_same_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);
    let item = card_item(Some(candidate_card("Foo", Rarity::Ul)));

    let first = resolver.resolve(&item).await?;
    let second = resolver.resolve(&item).await?;

    assert_eq!(first, second);
    assert_eq!(test.catalog().count_candidates().await?, 1);
    assert_eq!(test.catalog().count_card_infos().await?, 1);

    Ok(())
}

/// Expect the same candidate name with a different rarity to be a distinct
/// identity
#[tokio::test]
async fn distinguishes_rarities_of_same_candidate() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);

    let ultra = resolver
        .resolve(&card_item(Some(candidate_card("Foo", Rarity::Ul))))
        .await?;
    let secret = resolver
        .resolve(&card_item(Some(candidate_card("Foo", Rarity::Sr))))
        .await?;

    assert_ne!(ultra, secret);
    assert_eq!(test.catalog().count_candidates().await?, 1);
    assert_eq!(test.catalog().count_card_infos().await?, 2);

    Ok(())
}

/// Expect the card code to take precedence over other identity data
#[tokio::test]
async fn card_code_takes_precedence() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);

    let mut with_candidate = coded_card("DUAD-KR049");
    with_candidate.candidate_name = Some("Foo".to_string());
    let first = resolver.resolve(&card_item(Some(with_candidate))).await?;

    // Same code with entirely different name data resolves to the same row
    let mut with_other_candidate = coded_card("DUAD-KR049");
    with_other_candidate.candidate_name = Some("Bar".to_string());
    let second = resolver
        .resolve(&card_item(Some(with_other_candidate)))
        .await?;

    assert_eq!(first, second);
    assert_eq!(test.catalog().count_card_infos().await?, 1);

    Ok(())
}

/// Expect resolution by an existing canonical card name and rarity
#[tokio::test]
async fn resolves_by_card_name_and_rarity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let card_name = test.catalog().insert_card_name("Dark Magician").await?;

    let dto = CreateCardInfoDto {
        card_name_id: Some(card_name.id),
        candidate_id: None,
        candidate_name: None,
        card_code: None,
        nation: CardNation::Kr,
        rarity: Rarity::Ur,
    };

    let resolver = ItemResolver::new(&test.state.db);
    let first = resolver.resolve(&card_item(Some(dto.clone()))).await?;
    let second = resolver.resolve(&card_item(Some(dto))).await?;

    assert_eq!(first, second);
    // No candidate involved when an id-based identity is supplied
    assert_eq!(test.catalog().count_candidates().await?, 0);

    Ok(())
}

/// Expect a pre-resolved info id to pass through without touching storage
#[tokio::test]
async fn pre_resolved_info_id_passes_through() -> Result<(), TestError> {
    // No tables at all; a passthrough must not hit the database
    let test = test_setup_with_tables!()?;

    let mut item = card_item(None);
    item.info_id = Some(42);

    let resolver = ItemResolver::new(&test.state.db);
    let resolved = resolver.resolve(&item).await?;

    assert_eq!(resolved, 42);

    Ok(())
}

/// Expect InvalidItemShape for a CARD item without its card payload
#[tokio::test]
async fn rejects_card_item_without_payload() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resolver = ItemResolver::new(&test.state.db);
    let result = resolver.resolve(&card_item(None)).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::InvalidItemShape(_)))
    ));

    Ok(())
}

/// Expect InvalidItemShape when no identity field is usable
#[tokio::test]
async fn rejects_card_without_any_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let bare = CreateCardInfoDto {
        card_name_id: None,
        candidate_id: None,
        candidate_name: None,
        card_code: None,
        nation: CardNation::Kr,
        rarity: Rarity::Ul,
    };

    let resolver = ItemResolver::new(&test.state.db);
    let result = resolver.resolve(&card_item(Some(bare))).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::InvalidItemShape(_)))
    ));
    assert_eq!(test.catalog().count_item_infos().await?, 0);

    Ok(())
}
