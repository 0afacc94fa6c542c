use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    model::listing::{
        AccessoryInfoViewDto, CardCandidateDto, CardInfoViewDto, CardNameDto, ItemInfoViewDto,
    },
    server::data::catalog::{
        card_candidate::CardCandidateRepository, card_name::CardNameRepository,
        item_info::ItemInfoRepository,
    },
};

/// Materializes item_info rows with their card/accessory details and the
/// referenced card names and candidates, in the order the rows were given.
pub(crate) async fn load_item_info_views<C: ConnectionTrait>(
    db: &C,
    infos: Vec<entity::item_info::Model>,
) -> Result<Vec<ItemInfoViewDto>, DbErr> {
    if infos.is_empty() {
        return Ok(Vec::new());
    }

    let info_ids: Vec<i32> = infos.iter().map(|info| info.id).collect();

    let item_info_repo = ItemInfoRepository::new(db);
    let cards = item_info_repo.get_card_details(&info_ids).await?;
    let accessories = item_info_repo.get_accessory_details(&info_ids).await?;

    let card_name_ids: Vec<i32> = cards.iter().filter_map(|card| card.card_name_id).collect();
    let candidate_ids: Vec<i32> = cards.iter().filter_map(|card| card.candidate_id).collect();

    let card_names: HashMap<i32, entity::card_name::Model> = CardNameRepository::new(db)
        .get_by_ids(&card_name_ids)
        .await?
        .into_iter()
        .map(|name| (name.id, name))
        .collect();
    let candidates: HashMap<i32, entity::card_candidate::Model> = CardCandidateRepository::new(db)
        .get_by_ids(&candidate_ids)
        .await?
        .into_iter()
        .map(|candidate| (candidate.id, candidate))
        .collect();

    let mut cards_by_info: HashMap<i32, entity::card_info::Model> = cards
        .into_iter()
        .map(|card| (card.item_info_id, card))
        .collect();
    let mut accessories_by_info: HashMap<i32, entity::accessory_info::Model> = accessories
        .into_iter()
        .map(|accessory| (accessory.item_info_id, accessory))
        .collect();

    let views = infos
        .into_iter()
        .map(|info| {
            let card_info = cards_by_info.remove(&info.id).map(|card| CardInfoViewDto {
                item_info_id: card.item_info_id,
                card_code: card.card_code,
                nation: card.nation,
                rarity: card.rarity,
                card_name: card
                    .card_name_id
                    .and_then(|id| card_names.get(&id))
                    .map(|name| CardNameDto {
                        id: name.id,
                        name: name.name.clone(),
                    }),
                candidate: card
                    .candidate_id
                    .and_then(|id| candidates.get(&id))
                    .map(|candidate| CardCandidateDto {
                        id: candidate.id,
                        name: candidate.name.clone(),
                    }),
            });

            let accessory_info =
                accessories_by_info
                    .remove(&info.id)
                    .map(|accessory| AccessoryInfoViewDto {
                        item_info_id: accessory.item_info_id,
                        name: accessory.name,
                    });

            ItemInfoViewDto {
                id: info.id,
                item_type: info.item_type,
                card_info,
                accessory_info,
            }
        })
        .collect();

    Ok(views)
}
