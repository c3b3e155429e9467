//! Init command implementation

use crate::cli::logging::log;
use crate::cli::{InitArgs, LogLevel};
use crate::config::schema::{Ndim, WorkflowKind};
use crate::templates::starter_yaml;
use std::fs;

fn parse_workflow(raw: &str) -> Result<WorkflowKind, String> {
    let canonical = raw.to_uppercase();
    WorkflowKind::parse(&canonical).ok_or_else(|| {
        format!(
            "Unknown workflow type: {raw}. Valid types: {}",
            WorkflowKind::CHOICES.join(", ")
        )
    })
}

fn parse_ndim(raw: &str) -> Result<Ndim, String> {
    match raw.to_uppercase().as_str() {
        "2D" => Ok(Ndim::TwoD),
        "3D" => Ok(Ndim::ThreeD),
        _ => Err(format!("Unknown dimensionality: {raw}. Valid values: 2D, 3D")),
    }
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let kind = parse_workflow(&args.workflow)?;
    let ndim = parse_ndim(&args.ndim)?;
    let yaml = starter_yaml(kind, ndim);

    match &args.output {
        Some(path) => {
            fs::write(path, &yaml).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote {} {} template to {}", ndim.as_str(), kind.as_str(), path.display()),
            );
        }
        None => print!("{yaml}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_parsing_is_case_insensitive() {
        assert_eq!(parse_workflow("denoising").unwrap(), WorkflowKind::Denoising);
        assert_eq!(parse_workflow("SEMANTIC_SEG").unwrap(), WorkflowKind::SemanticSeg);
    }

    #[test]
    fn unknown_workflow_lists_choices() {
        let err = parse_workflow("DEBLURRING").unwrap_err();
        assert!(err.contains("DENOISING"));
        assert!(err.contains("SEMANTIC_SEG"));
    }

    #[test]
    fn ndim_parsing_accepts_lowercase() {
        assert_eq!(parse_ndim("3d").unwrap(), Ndim::ThreeD);
        assert!(parse_ndim("4D").is_err());
    }

    #[test]
    fn init_writes_template_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starter.yaml");
        let args = InitArgs {
            workflow: "denoising".to_string(),
            ndim: "2D".to_string(),
            output: Some(path.clone()),
        };
        run_init(args, LogLevel::Quiet).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("DENOISING"));
        assert!(written.contains("PATCH_SIZE"));
    }
}
