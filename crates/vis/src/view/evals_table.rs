use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::table::Align;
use crate::table::TableColumn;
use crate::table::column;
use crate::table::table;

/// A table summarizing eval scores by model and task.
///
/// Shows the model, task and headline metric columns with friendly
/// labels by default; pass explicit columns to override.
pub fn evals_table(evals: &Data, columns: Option<Vec<TableColumn>>) -> Result<Component> {
    let columns = columns.unwrap_or_else(|| {
        vec![
            column("model").label("Model"),
            column("task_name").label("Task"),
            column("score_headline_metric").label("Metric"),
            column("score_headline_value").label("Value").align(Align::Center),
            column("score_headline_stderr").label("Stderr").align(Align::Center),
        ]
    });

    table(evals).columns(columns).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;
    use crate::error::VisError;
    use serde_json::json;

    fn evals() -> Data {
        let frame = Frame::from_columns([
            ("model", vec![json!("m1")]),
            ("task_name", vec![json!("t1")]),
            ("score_headline_metric", vec![json!("accuracy")]),
            ("score_headline_value", vec![json!(0.7)]),
            ("score_headline_stderr", vec![json!(0.02)]),
        ])
        .unwrap();
        Data::new("evals", frame)
    }

    #[test]
    fn default_columns_carry_friendly_labels() {
        let view = evals_table(&evals(), None).unwrap();

        let columns = view.config()["columns"].as_array().unwrap();
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[0], json!({ "name": "model", "label": "Model" }));
        assert_eq!(
            columns[3],
            json!({ "name": "score_headline_value", "label": "Value", "align": "center" })
        );
    }

    #[test]
    fn default_columns_are_validated() {
        let frame = Frame::from_columns([("model", vec![json!("m1")])]).unwrap();
        let data = Data::new("evals", frame);

        let result = evals_table(&data, None);

        assert!(matches!(
            result,
            Err(VisError::MissingColumn { column, .. }) if column == "task_name"
        ));
    }
}
