use super::entity::text_entity;
use super::layout::EntityKind;

text_entity! {
    /// A tractor unit and its permit/inspection deadlines.
    Truck: EntityKind::Truck => {
        id,
        placa,
        identificacao,
        ano,
        modelo,
        vencimento_aet_dnit,
        vencimento_aet_mg,
        vencimento_aet_sp,
        vencimento_aet_go,
        vencimento_civ_cipp,
        vencimento_cronotografo,
        exercicio_crlv,
        peso_tara,
        link_documentacao,
        status,
    }
}
