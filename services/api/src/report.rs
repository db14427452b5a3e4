use clap::Args;
use plotcheck::config::{AppConfig, ZoningConfig};
use plotcheck::error::AppError;
use plotcheck::geometry::{self, Vertex};
use plotcheck::zoning::{
    check, ComplianceEngine, ComplianceInput, ComplianceView, LegalityVerdict, ZoningCode,
};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Plot area in square meters
    #[arg(long, conflicts_with = "vertices", required_unless_present = "vertices")]
    pub(crate) plot_area: Option<f64>,
    /// JSON file holding the drawn boundary as [[lat, lng], ...]
    #[arg(long)]
    pub(crate) vertices: Option<PathBuf>,
    /// Width of the adjoining road in meters
    #[arg(long)]
    pub(crate) road_width: f64,
    /// Floors of the existing structure, to check legality
    #[arg(long)]
    pub(crate) current_floors: Option<i64>,
    /// Zoning code JSON file (defaults to PLOTCHECK_ZONING_CODE or the standard code)
    #[arg(long)]
    pub(crate) zoning_code: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AreaArgs {
    /// JSON file holding the drawn boundary as [[lat, lng], ...]
    pub(crate) path: PathBuf,
}

pub(crate) fn run_evaluation_report(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        plot_area,
        vertices,
        road_width,
        current_floors,
        zoning_code,
    } = args;

    let code = load_code(zoning_code)?;
    let (plot_area_sqm, measured) = match (plot_area, vertices) {
        (Some(area), _) => (area, false),
        (None, Some(path)) => (geometry::area(&read_vertices(&path)?)?, true),
        (None, None) => {
            return Err(plotcheck::zoning::InvalidInput::Missing {
                field: "plot_area",
            }
            .into())
        }
    };

    let engine = ComplianceEngine::new(code);
    let result = engine.evaluate(&ComplianceInput::new(plot_area_sqm, road_width))?;
    let verdict = current_floors
        .map(|floors| check(&result, floors).map(|verdict| (floors, verdict)))
        .transpose()?;

    print!(
        "{}",
        render_evaluation(&ComplianceView::from(&result), road_width, measured, verdict)
    );
    Ok(())
}

pub(crate) fn run_area_report(args: AreaArgs) -> Result<(), AppError> {
    let vertices = read_vertices(&args.path)?;
    let area = geometry::area(&vertices)?;
    println!(
        "Plot area: {:.2} m2 ({} vertices)",
        area,
        vertices.len()
    );
    Ok(())
}

fn load_code(path: Option<PathBuf>) -> Result<ZoningCode, AppError> {
    let zoning = match path {
        Some(code_path) => ZoningConfig {
            code_path: Some(code_path),
        },
        None => AppConfig::load()?.zoning,
    };
    Ok(zoning.load_code()?)
}

fn read_vertices(path: &Path) -> Result<Vec<Vertex>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let vertices = serde_json::from_str(&raw).map_err(std::io::Error::from)?;
    Ok(vertices)
}

pub(crate) fn render_evaluation(
    view: &ComplianceView,
    road_width: f64,
    measured: bool,
    verdict: Option<(i64, LegalityVerdict)>,
) -> String {
    let source = if measured {
        "measured from boundary"
    } else {
        "as entered"
    };

    let mut out = format!(
        "Compliance results\n\
         Plot area: {} m2 ({source})\n\
         Road width: {road_width} m\n\
         FSI: {}\n\
         Max built-up area: {} m2\n\
         Max height: {} m\n\
         Max floors: {}\n\
         Ground coverage: {} m2\n",
        view.plot_area_sqm,
        view.permissible_fsi,
        view.max_builtup_area_sqm,
        view.max_building_height_m,
        view.max_floors,
        view.permissible_footprint_sqm,
    );

    if let Some((floors, verdict)) = verdict {
        out.push_str(&format!(
            "\nExisting structure: {floors} floor(s) -> {}\n",
            verdict.label()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn mid_width_view() -> ComplianceView {
        let result = ComplianceEngine::default()
            .evaluate(&ComplianceInput::new(874.72, 9.0))
            .expect("valid input");
        ComplianceView::from(result)
    }

    #[test]
    fn render_lists_every_envelope_value() {
        let output = render_evaluation(&mid_width_view(), 9.0, false, None);

        assert!(output.contains("FSI: 1.1"));
        assert!(output.contains("Max built-up area: 962.19 m2"));
        assert!(output.contains("Max height: 13.50 m"));
        assert!(output.contains("Max floors: 4"));
        assert!(output.contains("Ground coverage: 568.57 m2"));
        assert!(!output.contains("Existing structure"));
    }

    #[test]
    fn render_prints_one_value_per_line() {
        let output = render_evaluation(&mid_width_view(), 9.0, false, None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Compliance results");
        assert_eq!(lines[1], "Plot area: 874.72 m2 (as entered)");
        assert_eq!(lines[2], "Road width: 9 m");
        assert_eq!(lines.len(), 8);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn render_includes_legality_when_floors_given() {
        let output = render_evaluation(
            &mid_width_view(),
            9.0,
            false,
            Some((5, LegalityVerdict::Illegal)),
        );
        assert!(output.contains("5 floor(s) -> Illegal building"));
    }

    #[test]
    fn reads_vertex_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[[0.0, 0.0], [0.0, 0.001], [0.001, 0.001]]").expect("write vertices");

        let vertices = read_vertices(file.path()).expect("vertices parse");
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1], Vertex::new(0.0, 0.001));
    }

    #[test]
    fn malformed_vertex_file_is_an_io_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write file");

        let err = read_vertices(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
