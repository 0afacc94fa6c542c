use super::*;

/// Expect the create step to recover the existing row when it loses the
/// insert race on a card code
#[tokio::test]
async fn card_code_conflict_recovers_existing_row() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    // Another resolution already created this identity between our lookup
    // and insert.
    let (existing, _) = test
        .catalog()
        .insert_card_identity(Some("DUAD-KR049"), None, None, Rarity::Ul)
        .await?;

    let resolver = ItemResolver::new(&test.state.db);
    let resolved = resolver
        .create_card_identity(
            &CardIdentityKey::Code("DUAD-KR049"),
            &coded_card("DUAD-KR049"),
            None,
        )
        .await;

    assert!(resolved.is_ok(), "Error: {:?}", resolved);
    assert_eq!(resolved.unwrap(), existing.id);

    // The losing insert left nothing behind
    assert_eq!(test.catalog().count_item_infos().await?, 1);
    assert_eq!(test.catalog().count_card_infos().await?, 1);

    Ok(())
}

/// Expect the create step to recover the existing row on a composite
/// candidate+rarity conflict
#[tokio::test]
async fn candidate_rarity_conflict_recovers_existing_row() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let candidate = test.catalog().insert_candidate("Foo").await?;
    let (existing, _) = test
        .catalog()
        .insert_card_identity(None, None, Some(candidate.id), Rarity::Ul)
        .await?;

    let mut card = candidate_card("Foo", Rarity::Ul);
    card.candidate_name = None;
    card.candidate_id = Some(candidate.id);

    let resolver = ItemResolver::new(&test.state.db);
    let resolved = resolver
        .create_card_identity(
            &CardIdentityKey::Candidate(candidate.id, Rarity::Ul),
            &card,
            Some(candidate.id),
        )
        .await;

    assert!(resolved.is_ok(), "Error: {:?}", resolved);
    assert_eq!(resolved.unwrap(), existing.id);
    assert_eq!(test.catalog().count_card_infos().await?, 1);

    Ok(())
}

/// Expect the accessory create step to recover the existing row on a name
/// conflict
#[tokio::test]
async fn accessory_conflict_recovers_existing_row() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (existing, _) = test.catalog().insert_accessory_identity("Playmat").await?;

    let resolver = ItemResolver::new(&test.state.db);
    let resolved = resolver.create_accessory_identity("Playmat").await;

    assert!(resolved.is_ok(), "Error: {:?}", resolved);
    assert_eq!(resolved.unwrap(), existing.id);
    assert_eq!(test.catalog().count_item_infos().await?, 1);
    assert_eq!(test.catalog().count_accessory_infos().await?, 1);

    Ok(())
}

/// Expect IdentityConflict when the violated constraint belongs to a
/// different natural key than the one used for the re-read
#[tokio::test]
async fn mismatched_key_conflict_is_identity_conflict() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    // Existing identity holds (candidate, rarity) under code CODE-A
    let candidate = test.catalog().insert_candidate("Foo").await?;
    test.catalog()
        .insert_card_identity(Some("CODE-A"), None, Some(candidate.id), Rarity::Ul)
        .await?;

    // The insert collides on (candidate, rarity), but the re-read key is the
    // unseen code CODE-B, so no row can be found.
    let mut card = coded_card("CODE-B");
    card.candidate_id = Some(candidate.id);

    let resolver = ItemResolver::new(&test.state.db);
    let result = resolver
        .create_card_identity(&CardIdentityKey::Code("CODE-B"), &card, Some(candidate.id))
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::IdentityConflict(_)))
    ));

    Ok(())
}
