//! PROBLEM section - workflow selection and task-specific sub-blocks

use serde::{Deserialize, Serialize};

/// Supported workflow kinds (PROBLEM.TYPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowKind {
    SemanticSeg,
    InstanceSeg,
    Detection,
    Denoising,
    Classification,
    SuperResolution,
    SelfSupervised,
    ImageToImage,
}

impl WorkflowKind {
    /// Allowed literal forms, as written in documents
    pub const CHOICES: &'static [&'static str] = &[
        "SEMANTIC_SEG",
        "INSTANCE_SEG",
        "DETECTION",
        "DENOISING",
        "CLASSIFICATION",
        "SUPER_RESOLUTION",
        "SELF_SUPERVISED",
        "IMAGE_TO_IMAGE",
    ];

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "SEMANTIC_SEG" => Some(Self::SemanticSeg),
            "INSTANCE_SEG" => Some(Self::InstanceSeg),
            "DETECTION" => Some(Self::Detection),
            "DENOISING" => Some(Self::Denoising),
            "CLASSIFICATION" => Some(Self::Classification),
            "SUPER_RESOLUTION" => Some(Self::SuperResolution),
            "SELF_SUPERVISED" => Some(Self::SelfSupervised),
            "IMAGE_TO_IMAGE" => Some(Self::ImageToImage),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SemanticSeg => "SEMANTIC_SEG",
            Self::InstanceSeg => "INSTANCE_SEG",
            Self::Detection => "DETECTION",
            Self::Denoising => "DENOISING",
            Self::Classification => "CLASSIFICATION",
            Self::SuperResolution => "SUPER_RESOLUTION",
            Self::SelfSupervised => "SELF_SUPERVISED",
            Self::ImageToImage => "IMAGE_TO_IMAGE",
        }
    }
}

/// Image dimensionality (PROBLEM.NDIM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ndim {
    #[default]
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl Ndim {
    pub const CHOICES: &'static [&'static str] = &["2D", "3D"];

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "2D" => Some(Self::TwoD),
            "3D" => Some(Self::ThreeD),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeD => "3D",
        }
    }

    /// Spatial axes: 2 for 2D, 3 for 3D
    pub fn axes(self) -> usize {
        match self {
            Self::TwoD => 2,
            Self::ThreeD => 3,
        }
    }
}

/// Problem selection and task-specific options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct ProblemConfig {
    /// Workflow kind, the one key with no default
    #[serde(rename = "TYPE")]
    pub kind: WorkflowKind,

    pub ndim: Ndim,

    pub denoising: DenoisingConfig,

    pub instance_seg: InstanceSegConfig,

    pub detection: DetectionConfig,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            kind: WorkflowKind::SemanticSeg,
            ndim: Ndim::default(),
            denoising: DenoisingConfig::default(),
            instance_seg: InstanceSegConfig::default(),
            detection: DetectionConfig::default(),
        }
    }
}

/// Noise2Void denoising options (PROBLEM.DENOISING)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct DenoisingConfig {
    /// Percentage of pixels manipulated per patch, in (0, 1]
    pub n2v_perc_pix: f64,

    /// Pixel replacement strategy
    pub n2v_manipulator: String,

    /// Neighborhood radius for the manipulator
    pub n2v_neighborhood_radius: i64,

    /// Apply a structured blind-spot mask
    pub n2v_structmask: bool,
}

impl Default for DenoisingConfig {
    fn default() -> Self {
        Self {
            n2v_perc_pix: 0.198,
            n2v_manipulator: "uniform_withCP".to_string(),
            n2v_neighborhood_radius: 5,
            n2v_structmask: false,
        }
    }
}

/// Instance segmentation channel decoding (PROBLEM.INSTANCE_SEG)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct InstanceSegConfig {
    /// Representation produced by the network, e.g. binary mask + contours
    pub data_channels: String,

    /// Foreground threshold for the watershed seed mask
    pub data_mw_th1: f64,

    /// Contour threshold
    pub data_mw_th2: f64,

    /// Foreground threshold applied after the watershed
    pub data_mw_th3: f64,

    /// Minimum instance size in pixels; smaller objects are dropped
    pub data_remove_small_obj: i64,
}

impl Default for InstanceSegConfig {
    fn default() -> Self {
        Self {
            data_channels: "BC".to_string(),
            data_mw_th1: 0.2,
            data_mw_th2: 0.1,
            data_mw_th3: 0.3,
            data_remove_small_obj: 10,
        }
    }
}

/// Point detection options (PROBLEM.DETECTION)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct DetectionConfig {
    /// Dilation applied to each central point when building seed masks
    pub central_point_dilation: i64,

    /// Verify generated point masks against the source annotations
    pub check_points_created: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            central_point_dilation: 3,
            check_points_created: true,
        }
    }
}
