use super::entity::text_entity;
use super::layout::EntityKind;

text_entity! {
    /// An employer / contracting company.
    Company: EntityKind::Company => {
        id,
        enterprise,
        cnpj,
    }
}
