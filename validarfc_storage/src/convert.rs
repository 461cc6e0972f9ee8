use sea_orm::Set;
use validarfc_core::ValidationRecord;
use validarfc_entities::validations;

pub fn record_from_model(m: validations::Model) -> ValidationRecord {
    ValidationRecord {
        rfc: m.rfc,
        is_valid: m.is_valid,
        created_at: m.created_at,
    }
}

pub fn active_model_from_record(r: &ValidationRecord) -> validations::ActiveModel {
    validations::ActiveModel {
        rfc: Set(r.rfc.clone()),
        is_valid: Set(r.is_valid),
        created_at: Set(r.created_at),
    }
}
