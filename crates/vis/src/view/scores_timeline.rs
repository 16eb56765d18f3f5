use crate::component::Component;
use crate::data::Data;
use crate::error::Result;
use crate::error::VisError;
use crate::input::checkbox_group;
use crate::input::select;
use crate::layout::vconcat;
use crate::layout::vspace;
use crate::mark::dot;
use crate::mark::rule_x;
use crate::plot::Domain;
use crate::plot::LegendKind;
use crate::plot::PlotAttributes;
use crate::plot::legend;
use crate::plot::plot;
use crate::transform::ci_bounds;
use crate::view::model::log_viewer_channel;

const REQUIRED_COLUMNS: [&str; 7] = [
    "model",
    "organization",
    "release_date",
    "eval",
    "scorer",
    "score",
    "stderr",
];

/// A timeline of scores by model release date under construction.
#[derive(Debug, Clone)]
pub struct ScoresTimeline {
    data: Data,
    organizations: Option<Vec<String>>,
    ci: Option<f64>,
    x_label: String,
    y_label: String,
    eval_label: String,
    attributes: Option<PlotAttributes>,
}

/// Eval scores by model, organization and release date: a dot plot
/// over time with an eval selector and organization checkboxes.
///
/// The data must carry `model`, `organization`, `release_date`,
/// `eval`, `scorer`, `score` and `stderr` columns; an optional
/// `log_viewer` column adds a tooltip link.
pub fn scores_timeline(data: &Data) -> ScoresTimeline {
    ScoresTimeline {
        data: data.clone(),
        organizations: None,
        ci: Some(0.95),
        x_label: "Release Date".to_owned(),
        y_label: "Score".to_owned(),
        eval_label: "Eval".to_owned(),
        attributes: None,
    }
}

impl ScoresTimeline {
    /// The organizations to include, in presentation order.
    pub fn organizations<I, S>(mut self, organizations: I) -> ScoresTimeline
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.organizations = Some(organizations.into_iter().map(Into::into).collect());
        self
    }

    /// The confidence level of the whiskers, or `None` to disable
    /// them.
    pub fn ci(mut self, ci: Option<f64>) -> ScoresTimeline {
        self.ci = ci;
        self
    }

    /// The x axis label.
    pub fn x_label(mut self, label: &str) -> ScoresTimeline {
        self.x_label = label.to_owned();
        self
    }

    /// The y axis label.
    pub fn y_label(mut self, label: &str) -> ScoresTimeline {
        self.y_label = label.to_owned();
        self
    }

    /// The label of the eval select input.
    pub fn eval_label(mut self, label: &str) -> ScoresTimeline {
        self.eval_label = label.to_owned();
        self
    }

    /// Additional plot attributes, overriding the view's defaults.
    pub fn attributes(mut self, attributes: PlotAttributes) -> ScoresTimeline {
        self.attributes = Some(attributes);
        self
    }

    /// Builds the view.
    pub fn build(self) -> Result<Component> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !self.data.contains_column(column))
            .map(|column| (*column).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(VisError::MissingFrameColumns(missing));
        }

        let eval_select = select(&self.data)
            .label(&format!("{}: ", self.eval_label))
            .column("eval")
            .value("auto")
            .width(370.0)
            .build()?;

        let mut org_checkboxes = checkbox_group(&self.data).column("organization");
        if let Some(organizations) = &self.organizations {
            org_checkboxes = org_checkboxes.options(organizations.clone());
        }
        let org_checkboxes = org_checkboxes.build()?;

        let mut channels: Vec<(String, String)> = [
            ("Organization", "organization"),
            ("Model", "model"),
            ("Release Date", "release_date"),
            ("Scorer", "scorer"),
            ("Score", "score"),
            ("Stderr", "stderr"),
        ]
        .map(|(label, column)| (label.to_owned(), column.to_owned()))
        .to_vec();
        log_viewer_channel(&self.data, &mut channels);

        let dots = dot(&self.data)
            .x("release_date")
            .y("score")
            .r(3.0)
            .fill("organization")
            .channels(channels);

        let mut chart = plot().mark(dots);

        if let Some(level) = self.ci {
            let (lower, upper) = ci_bounds(level, "score", "stderr")?;
            chart = chart.mark(
                rule_x(&self.data)
                    .x("release_date")
                    .y("score")
                    .y1(lower)
                    .y2(upper)
                    .stroke("organization")
                    .stroke_opacity(0.4)
                    .marker("tick-x"),
            );
        }

        let color_domain = match &self.organizations {
            Some(organizations) => Domain::from(organizations.clone()),
            None => Domain::Fixed,
        };
        let defaults = PlotAttributes {
            x_domain: Some(Domain::Fixed),
            y_domain: Some(Domain::from(vec![0.0, 1.0])),
            color_label: Some("Organizations".to_owned()),
            color_domain: Some(color_domain),
            ..Default::default()
        };
        chart = chart.attributes(&defaults);
        if let Some(attributes) = &self.attributes {
            chart = chart.attributes(attributes);
        }

        let chart = chart
            .legend(legend(LegendKind::Color).target(self.data.selection()))
            .x_label(Some(&self.x_label))
            .y_label(Some(&self.y_label))
            .build();

        Ok(vconcat([eval_select, org_checkboxes, vspace(15.0), chart]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;
    use serde_json::json;

    fn evals() -> Data {
        let frame = Frame::from_columns([
            ("model", vec![json!("m1"), json!("m2")]),
            ("organization", vec![json!("OpenAI"), json!("Anthropic")]),
            ("release_date", vec![json!("2024-05-13"), json!("2024-06-20")]),
            ("eval", vec![json!("gpqa"), json!("gpqa")]),
            ("scorer", vec![json!("choice"), json!("choice")]),
            ("score", vec![json!(0.5), json!(0.6)]),
            ("stderr", vec![json!(0.01), json!(0.02)]),
        ])
        .unwrap();
        Data::new("evals", frame)
    }

    #[test]
    fn the_view_stacks_inputs_above_the_plot() {
        let view = scores_timeline(&evals()).build().unwrap();

        let column = view.config()["vconcat"].as_array().unwrap();
        assert_eq!(column.len(), 4);
        assert_eq!(column[0]["input"], json!("select"));
        assert_eq!(column[0]["value"], json!("auto"));
        assert_eq!(column[0]["width"], json!(370.0));
        assert_eq!(column[1]["input"], json!("checkbox_group"));
        assert_eq!(column[2]["vspace"], json!(15.0));
        assert!(column[3].get("hconcat").is_some());
    }

    #[test]
    fn missing_columns_are_reported_together() {
        let frame = Frame::from_columns([("model", vec![json!("m1")])]).unwrap();
        let data = Data::new("evals", frame);

        let result = scores_timeline(&data).build();

        assert!(matches!(
            result,
            Err(VisError::MissingFrameColumns(columns)) if columns.len() == 6
        ));
    }

    #[test]
    fn organizations_order_the_color_domain() {
        let view = scores_timeline(&evals())
            .organizations(["OpenAI", "Anthropic"])
            .build()
            .unwrap();

        let chart = &view.config()["vconcat"][3]["hconcat"][0];
        assert_eq!(chart["colorDomain"], json!(["OpenAI", "Anthropic"]));
        assert_eq!(chart["xDomain"], json!("fixed"));
        assert_eq!(chart["yDomain"], json!([0.0, 1.0]));
        assert_eq!(chart["colorLabel"], json!("Organizations"));
    }

    #[test]
    fn whiskers_fade_and_mark_their_ends() {
        let view = scores_timeline(&evals()).build().unwrap();

        let marks = view.config()["vconcat"][3]["hconcat"][0]["plot"]
            .as_array()
            .unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[1]["strokeOpacity"], json!(0.4));
        assert_eq!(marks[1]["marker"], json!("tick-x"));
        assert_eq!(
            marks[1]["y1"],
            json!({ "sql": "score - (1.96 * stderr)" })
        );
    }
}
