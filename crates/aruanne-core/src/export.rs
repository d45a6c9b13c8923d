use crate::model::{LabeledTable, LabeledTables, Table};
use indexmap::IndexMap;

/// Assemble the association map into a workbook, sheets in reverse
/// association order.
///
/// The last keyword bound by the matcher comes out first. Downstream
/// consumers rely on this ordering, so it is part of the contract, not an
/// accident of iteration.
pub fn assemble_workbook(assoc: &IndexMap<String, &Table>) -> LabeledTables {
    let sheets = assoc
        .iter()
        .rev()
        .map(|(keyword, table)| LabeledTable {
            keyword: keyword.clone(),
            table: (*table).clone(),
        })
        .collect();
    LabeledTables { sheets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(index: usize) -> Table {
        Table::new(index, vec![vec![format!("t{index}")]])
    }

    #[test]
    fn test_sheets_come_out_in_reverse_association_order() {
        let t0 = table(0);
        let t1 = table(1);
        let mut assoc: IndexMap<String, &Table> = IndexMap::new();
        assoc.insert("Revenue".into(), &t0);
        assoc.insert("Expenses".into(), &t1);

        let workbook = assemble_workbook(&assoc);
        let labels: Vec<&str> = workbook
            .sheets
            .iter()
            .map(|s| s.keyword.as_str())
            .collect();
        assert_eq!(labels, ["Expenses", "Revenue"]);
    }

    #[test]
    fn test_grids_are_carried_verbatim() {
        let t0 = table(7);
        let mut assoc: IndexMap<String, &Table> = IndexMap::new();
        assoc.insert("Bilanss".into(), &t0);

        let workbook = assemble_workbook(&assoc);
        assert_eq!(workbook.sheets[0].table, t0);
    }

    #[test]
    fn test_empty_association_yields_empty_workbook() {
        let assoc: IndexMap<String, &Table> = IndexMap::new();
        assert!(assemble_workbook(&assoc).sheets.is_empty());
    }
}
