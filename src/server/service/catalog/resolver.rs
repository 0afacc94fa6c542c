use entity::sea_orm_active_enums::Rarity;
use sea_orm::{ConnectionTrait, DbErr, SqlErr, TransactionSession, TransactionTrait};

use crate::{
    model::listing::{CreateCardInfoDto, CreateListingItemDto, ItemPayloadDto},
    server::{
        data::catalog::{
            card_candidate::CardCandidateRepository,
            item_info::{ItemInfoRepository, NewCardIdentity},
        },
        error::{catalog::CatalogError, Error},
    },
};

/// Natural identity key of a card, in lookup precedence order: the printed
/// card code wins when present, then the candidate-based composite, then the
/// canonical-name composite.
#[derive(Debug)]
pub(crate) enum CardIdentityKey<'a> {
    Code(&'a str),
    Candidate(i32, Rarity),
    Name(i32, Rarity),
}

impl CardIdentityKey<'_> {
    fn describe(&self) -> String {
        match self {
            Self::Code(code) => format!("cardCode={code}"),
            Self::Candidate(id, rarity) => format!("candidateId={id}, rarity={rarity:?}"),
            Self::Name(id, rarity) => format!("cardNameId={id}, rarity={rarity:?}"),
        }
    }
}

/// Maps one submitted line item to the id of its canonical item_info entry,
/// creating catalog rows the first time an identity is seen.
///
/// Every operation runs on the caller-supplied connection; during listing
/// creation that is the open transaction, so catalog rows created here roll
/// back with the listing if the submission fails later.
pub struct ItemResolver<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ItemResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn resolve(&self, item: &CreateListingItemDto) -> Result<i32, Error> {
        // The client re-referenced a known catalog entry; nothing to do.
        if let Some(info_id) = item.info_id {
            return Ok(info_id);
        }

        match &item.payload {
            ItemPayloadDto::Card { card_info } => {
                let card = card_info.as_ref().ok_or_else(|| {
                    CatalogError::InvalidItemShape("CARD item without cardInfo".to_string())
                })?;

                self.resolve_card(card).await
            }
            ItemPayloadDto::Accessory { accessory_info } => {
                let accessory = accessory_info.as_ref().ok_or_else(|| {
                    CatalogError::InvalidItemShape("ACCESSORY item without accessoryInfo".to_string())
                })?;

                self.resolve_accessory(&accessory.name).await
            }
        }
    }

    async fn resolve_card(&self, card: &CreateCardInfoDto) -> Result<i32, Error> {
        let candidate_id = self.ensure_candidate(card).await?;
        let key = derive_card_key(card, candidate_id)?;

        if let Some(existing) = self.find_card(&key).await? {
            return Ok(existing.item_info_id);
        }

        self.create_card_identity(&key, card, candidate_id).await
    }

    /// Get-or-create of the candidate row when the item brings a brand-new
    /// name and no id-based identity. This must be one atomic upsert, since
    /// concurrent submissions may introduce the same name simultaneously.
    async fn ensure_candidate(&self, card: &CreateCardInfoDto) -> Result<Option<i32>, Error> {
        if card.candidate_id.is_some() || card.card_name_id.is_some() {
            return Ok(card.candidate_id);
        }

        match card.candidate_name.as_deref() {
            Some(name) => {
                let candidate = CardCandidateRepository::new(self.db).upsert(name).await?;

                Ok(Some(candidate.id))
            }
            None => Ok(None),
        }
    }

    async fn find_card(
        &self,
        key: &CardIdentityKey<'_>,
    ) -> Result<Option<entity::card_info::Model>, DbErr> {
        let item_info_repo = ItemInfoRepository::new(self.db);

        match key {
            CardIdentityKey::Code(code) => item_info_repo.find_card_by_code(code).await,
            CardIdentityKey::Candidate(candidate_id, rarity) => {
                item_info_repo
                    .find_card_by_candidate(*candidate_id, rarity.clone())
                    .await
            }
            CardIdentityKey::Name(card_name_id, rarity) => {
                item_info_repo
                    .find_card_by_name(*card_name_id, rarity.clone())
                    .await
            }
        }
    }

    /// Create half of the check-then-act sequence.
    ///
    /// Two concurrent resolutions for the same new identity can both miss
    /// the lookup; the unique constraints let exactly one insert win. The
    /// insert runs inside a savepoint so the loser can roll it back and
    /// re-read the winner's row on the still-usable outer transaction. A
    /// miss on that re-read breaks the isolation assumptions and surfaces
    /// as [`CatalogError::IdentityConflict`].
    pub(crate) async fn create_card_identity(
        &self,
        key: &CardIdentityKey<'_>,
        card: &CreateCardInfoDto,
        candidate_id: Option<i32>,
    ) -> Result<i32, Error> {
        let identity = NewCardIdentity {
            card_code: card.card_code.clone(),
            card_name_id: card.card_name_id,
            candidate_id,
            nation: card.nation.clone(),
            rarity: card.rarity.clone(),
        };

        let nested = self.db.begin().await?;
        let created = ItemInfoRepository::new(&nested).create_card(identity).await;

        match created {
            Ok(info) => {
                nested.commit().await?;

                Ok(info.id)
            }
            Err(err) if is_unique_violation(&err) => {
                nested.rollback().await?;

                match self.find_card(key).await? {
                    Some(existing) => Ok(existing.item_info_id),
                    None => Err(CatalogError::IdentityConflict(key.describe()).into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn resolve_accessory(&self, name: &str) -> Result<i32, Error> {
        let item_info_repo = ItemInfoRepository::new(self.db);

        if let Some(existing) = item_info_repo.find_accessory_by_name(name).await? {
            return Ok(existing.item_info_id);
        }

        self.create_accessory_identity(name).await
    }

    /// Accessory counterpart of [`Self::create_card_identity`].
    pub(crate) async fn create_accessory_identity(&self, name: &str) -> Result<i32, Error> {
        let nested = self.db.begin().await?;
        let created = ItemInfoRepository::new(&nested).create_accessory(name).await;

        match created {
            Ok(info) => {
                nested.commit().await?;

                Ok(info.id)
            }
            Err(err) if is_unique_violation(&err) => {
                nested.rollback().await?;

                let item_info_repo = ItemInfoRepository::new(self.db);
                match item_info_repo.find_accessory_by_name(name).await? {
                    Some(existing) => Ok(existing.item_info_id),
                    None => {
                        Err(CatalogError::IdentityConflict(format!("accessory name={name}")).into())
                    }
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn derive_card_key<'a>(
    card: &'a CreateCardInfoDto,
    candidate_id: Option<i32>,
) -> Result<CardIdentityKey<'a>, CatalogError> {
    if let Some(code) = card.card_code.as_deref() {
        return Ok(CardIdentityKey::Code(code));
    }

    if let Some(candidate_id) = candidate_id {
        return Ok(CardIdentityKey::Candidate(candidate_id, card.rarity.clone()));
    }

    if let Some(card_name_id) = card.card_name_id {
        return Ok(CardIdentityKey::Name(card_name_id, card.rarity.clone()));
    }

    Err(CatalogError::InvalidItemShape(
        "CARD item carries no cardCode, candidate, or cardName".to_string(),
    ))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
