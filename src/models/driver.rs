use super::entity::text_entity;
use super::layout::EntityKind;

text_entity! {
    /// A motorist record: identity, labour data and document deadlines.
    /// Dates are `dd/mm/yyyy` text as stored.
    Driver: EntityKind::Driver => {
        id,
        nome,
        data_admissao,
        cpf,
        cnh,
        rg,
        codigo_sap,
        operacao,
        ctps,
        serie,
        data_nascimento,
        primeira_cnh,
        data_expedicao,
        vencimento_cnh,
        done_mopp,
        vencimento_mopp,
        done_toxicologico_clt,
        vencimento_toxicologico_clt,
        done_aso_semestral,
        vencimento_aso_semestral,
        done_aso_periodico,
        vencimento_aso_periodico,
        done_buonny,
        vencimento_buonny,
        telefone,
        endereco,
        filiacao,
        estado_civil,
        filhos,
        cargo,
        empresa,
        status,
        conf_jornada,
        conf_fecham,
        done_toxicologico_cnh,
        vencimento_toxicologico_cnh,
        email,
    }
}

impl Driver {
    /// Active drivers carry a status starting with "ativo" (any case).
    /// "inativo" and friends are not active.
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.trim().to_lowercase().starts_with("ativo"))
            .unwrap_or(false)
    }

    pub fn display_name(&self) -> &str {
        self.nome.as_deref().unwrap_or("--")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_is_prefix_based() {
        let mut d = Driver {
            status: Some("Ativo".into()),
            ..Default::default()
        };
        assert!(d.is_active());

        d.status = Some("INATIVO".into());
        assert!(!d.is_active());

        d.status = None;
        assert!(!d.is_active());
    }

    #[test]
    fn attribute_lookup_by_name() {
        let d = Driver {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert_eq!(d.attribute("email"), Some("a@b.c"));
        assert_eq!(d.attribute("cpf"), None);
        assert_eq!(d.attribute("nope"), None);
        assert_eq!(d.attributes().len(), 37);
    }
}
