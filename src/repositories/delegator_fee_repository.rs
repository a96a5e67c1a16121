use crate::models::DelegatorFee;
use futures::StreamExt;
use mongodb::bson::{doc, to_document};
use mongodb::{Collection, Database};

pub async fn get_fee(
    db: &Database,
    baker: &str,
    address: &str,
) -> Result<Option<DelegatorFee>, mongodb::error::Error> {
    let collection: Collection<DelegatorFee> = db.collection("delegator_fees");
    collection
        .find_one(doc! { "baker": baker, "address": address })
        .await
}

pub async fn save_fee(db: &Database, fee: &DelegatorFee) -> Result<(), mongodb::error::Error> {
    let collection: Collection<DelegatorFee> = db.collection("delegator_fees");
    let filter = doc! { "baker": &fee.baker, "address": &fee.address };
    let update = doc! { "$set": to_document(fee)? };
    collection.update_one(filter, update).upsert(true).await?;
    Ok(())
}

pub async fn list_fees(
    db: &Database,
    baker: &str,
) -> Result<Vec<DelegatorFee>, mongodb::error::Error> {
    let collection: Collection<DelegatorFee> = db.collection("delegator_fees");
    let mut cursor = collection.find(doc! { "baker": baker }).await?;
    let mut fees = Vec::new();
    while let Some(fee) = cursor.next().await {
        fees.push(fee?);
    }
    Ok(fees)
}
