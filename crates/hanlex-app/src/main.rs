use clap::{Parser, ValueEnum};

mod output;
mod pipeline;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "hanlex")]
#[command(about = "Build canonical dictionary artifacts from raw sources")]
struct Args {
    /// Which pipeline(s) to run
    #[arg(value_enum, default_value_t = PipelineArg::All)]
    pipeline: PipelineArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PipelineArg {
    Cantonese,
    Mandarin,
    All,
}

impl PipelineArg {
    fn selected(self) -> Vec<pipeline::Pipeline> {
        match self {
            PipelineArg::Cantonese => vec![pipeline::cantonese()],
            PipelineArg::Mandarin => vec![pipeline::mandarin()],
            PipelineArg::All => vec![pipeline::cantonese(), pipeline::mandarin()],
        }
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    for pipeline in args.pipeline.selected() {
        if let Err(e) = pipeline.run() {
            tracing::error!("{} pipeline failed: {e:#}", pipeline.name());
        }
    }
}
