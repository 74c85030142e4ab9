use crate::core::logic::DriverStatusRow;
use crate::errors::AppResult;
use ::csv::Writer;
use std::path::Path;

/// Write the driver status report as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[DriverStatusRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "nome",
        "cpf",
        "cnh",
        "operacao",
        "empresa",
        "status_kind",
        "status_message",
    ])?;

    for r in rows {
        wtr.write_record([
            r.id.as_str(),
            r.nome.as_str(),
            r.cpf.as_str(),
            r.cnh.as_str(),
            r.operacao.as_str(),
            r.empresa.as_str(),
            r.status_kind.as_str(),
            r.status_message.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
