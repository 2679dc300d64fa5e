use crate::ui::table::Formatter;
use netname_scheme::{NAMING_SCHEMES, NamingScheme, default_scheme, latest};
use std::process::ExitCode;
use tabled::Tabled;

#[derive(Clone, Debug, Default, clap::Args)]
pub struct ListArg {
    /// Omit the column header row
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Debug, Tabled)]
struct SchemeRow {
    #[tabled(rename = "NAME")]
    name: &'static str,
    #[tabled(rename = "CAPABILITIES")]
    capabilities: String,
    #[tabled(rename = "")]
    note: String,
}

impl From<&'static NamingScheme> for SchemeRow {
    fn from(scheme: &'static NamingScheme) -> Self {
        let mut notes = Vec::new();
        if std::ptr::eq(scheme, latest()) {
            notes.push("latest");
        }
        if std::ptr::eq(scheme, default_scheme()) {
            notes.push("default");
        }

        Self {
            name: scheme.name,
            capabilities: super::capability_list(scheme.flags),
            note: notes.join(", "),
        }
    }
}

impl ListArg {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let table = Formatter {
            footer: Some(format!("default: {}", default_scheme().name)),
            hide_col_names: self.no_header,
        }
        .build(NAMING_SCHEMES.iter().map(SchemeRow::from));

        println!("{table}");
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_marks_latest() {
        let row = SchemeRow::from(latest());
        assert_eq!(row.name, "rhel-8.7");
        assert!(row.note.contains("latest"));
    }

    #[test]
    fn test_rows_from_table_mark_only_last() {
        let rows: Vec<_> = NAMING_SCHEMES.iter().map(SchemeRow::from).collect();
        let (last, rest) = rows.split_last().unwrap();
        assert_eq!(last.name, "rhel-8.7");
        assert!(last.note.contains("latest"));
        assert!(rest.iter().all(|row| !row.note.contains("latest")));
    }

    #[test]
    fn test_rows_from_table_mark_default_once() {
        let marked: Vec<_> = NAMING_SCHEMES
            .iter()
            .map(SchemeRow::from)
            .filter(|row| row.note.contains("default"))
            .map(|row| row.name)
            .collect();
        assert_eq!(marked, vec![default_scheme().name]);
    }

    #[test]
    fn test_row_v238_has_no_capabilities() {
        let row = SchemeRow::from(&NAMING_SCHEMES[0]);
        assert_eq!(row.name, "v238");
        assert_eq!(row.capabilities, "-");
        assert!(!row.note.contains("latest"));
    }

    #[test]
    fn test_table_lists_every_scheme() {
        let table = Formatter::default()
            .build(NAMING_SCHEMES.iter().map(SchemeRow::from))
            .to_string();
        for scheme in NAMING_SCHEMES {
            assert!(table.contains(scheme.name));
        }
        assert!(table.contains("NAME"));
    }

    #[test]
    fn test_table_without_col_names() {
        let table = Formatter {
            hide_col_names: true,
            ..Default::default()
        }
        .build(NAMING_SCHEMES.iter().map(SchemeRow::from))
        .to_string();
        assert!(!table.contains("CAPABILITIES"));
    }
}
