// Cattle Health Assessment 🐄 AGPL-3.0 License

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use crate::cli::args::AnalyzeArgs;
use crate::client::{DetectionClient, DetectionConfig};
use crate::metrics::MetricsSource;
use crate::render::print_assessment;
use crate::report::write_report;
use crate::results::Assessment;
use crate::{error, success, verbose, warn};

/// Run one photo assessment.
///
/// Always renders a result view: detection failures degrade to placeholder
/// metrics rather than aborting. Exits non-zero only when the source image
/// itself is unusable.
pub fn run_analysis(args: &AnalyzeArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let source = Path::new(&args.source);
    if !source.is_file() {
        error!("Source image not found: {}", source.display());
        process::exit(1);
    }

    let client = DetectionClient::new(DetectionConfig {
        endpoint: args.endpoint.clone(),
        api_key: args.api_key.clone(),
    });

    verbose!("Uploading {} for keypoint detection...", source.display());
    let assessment = Assessment::from_detection(client.detect(source));

    match assessment.source {
        MetricsSource::Measured => {
            verbose!("Detected {} keypoints", assessment.keypoints.len());
        }
        MetricsSource::Fallback(reason) => {
            warn!("Using placeholder metrics: {reason}");
        }
    }

    print_assessment(&assessment);

    let output_dir = PathBuf::from(&args.output);
    if (args.report || args.save) && !output_dir.is_dir() {
        if let Err(e) = fs::create_dir_all(&output_dir) {
            error!("Failed to create output directory: {e}");
            process::exit(1);
        }
    }

    if args.report {
        match write_report(&assessment, &output_dir) {
            Ok(path) => {
                success!("Report saved to {}", path.display());
            }
            Err(e) => {
                error!("Failed to write report: {e}");
            }
        }
    }

    #[cfg(feature = "annotate")]
    if args.save {
        let dest = crate::annotate::annotated_path(source, &output_dir);
        match crate::annotate::annotate_image(source, &assessment.keypoints, &dest) {
            Ok(()) => {
                success!("Annotated image saved to {}", dest.display());
            }
            Err(e) => {
                error!("Failed to annotate image: {e}");
            }
        }
    }

    #[cfg(not(feature = "annotate"))]
    if args.save {
        warn!(
            "--save requires the 'annotate' feature. Compile with --features annotate to enable saving."
        );
    }
}
