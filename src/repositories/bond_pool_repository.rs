use crate::models::{BondPoolMember, BondPoolSettings};
use futures::StreamExt;
use mongodb::bson::{doc, to_document};
use mongodb::{Collection, Database};

pub async fn get_settings(
    db: &Database,
    baker: &str,
) -> Result<Option<BondPoolSettings>, mongodb::error::Error> {
    let collection: Collection<BondPoolSettings> = db.collection("bond_pool_settings");
    collection.find_one(doc! { "baker": baker }).await
}

pub async fn save_settings(
    db: &Database,
    settings: &BondPoolSettings,
) -> Result<(), mongodb::error::Error> {
    let collection: Collection<BondPoolSettings> = db.collection("bond_pool_settings");
    let filter = doc! { "baker": &settings.baker };
    let update = doc! { "$set": to_document(settings)? };
    collection.update_one(filter, update).upsert(true).await?;
    Ok(())
}

pub async fn get_member(
    db: &Database,
    baker: &str,
    address: &str,
) -> Result<Option<BondPoolMember>, mongodb::error::Error> {
    let collection: Collection<BondPoolMember> = db.collection("bond_pool_members");
    collection
        .find_one(doc! { "baker": baker, "address": address })
        .await
}

pub async fn save_member(
    db: &Database,
    member: &BondPoolMember,
) -> Result<(), mongodb::error::Error> {
    let collection: Collection<BondPoolMember> = db.collection("bond_pool_members");
    let filter = doc! { "baker": &member.baker, "address": &member.address };
    let update = doc! { "$set": to_document(member)? };
    collection.update_one(filter, update).upsert(true).await?;
    Ok(())
}

pub async fn list_members(
    db: &Database,
    baker: &str,
) -> Result<Vec<BondPoolMember>, mongodb::error::Error> {
    let collection: Collection<BondPoolMember> = db.collection("bond_pool_members");
    let mut cursor = collection.find(doc! { "baker": baker }).await?;
    let mut members = Vec::new();
    while let Some(member) = cursor.next().await {
        members.push(member?);
    }
    Ok(members)
}
