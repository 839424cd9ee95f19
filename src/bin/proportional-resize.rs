use batch_resize::{
    cli::ProportionalArgs, error::ResizeError, init::init, progress::Dots,
    proportional::ProportionalPlan,
};
use clap::Parser;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn real_main() -> Result<(), ResizeError> {
    let args = ProportionalArgs::parse();
    init(args.verbose);
    let plan = ProportionalPlan::new(args.into_options()?)?;

    let options = plan.options();
    println!(
        "Resizing images from directory `{}` to fit within: {}",
        options.input.display(),
        options.size
    );

    let mut dots = Dots::new();
    let result = plan.run(&mut dots);
    dots.finish();
    let summary = result?;

    println!(
        "\nDone resizing {} files in {} directories ({} skipped).\nSaved to directory: `{}`",
        summary.written,
        summary.directories,
        summary.skipped,
        options.output.display()
    );
    Ok(())
}
