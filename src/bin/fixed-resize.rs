use batch_resize::{
    cli::FixedArgs, error::ResizeError, fixed::FixedPlan, init::init, progress::Dots,
};
use clap::Parser;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn real_main() -> Result<(), ResizeError> {
    let args = FixedArgs::parse();
    init(args.verbose);
    let plan = FixedPlan::new(args.into_options())?;

    let options = plan.options();
    println!(
        "{} files to resize from directory `{}` to target size: {}",
        plan.files().len(),
        options.input.display(),
        options.size
    );

    let mut dots = Dots::new();
    let result = plan.run(&mut dots);
    dots.finish();
    let summary = result?;

    println!(
        "\nDone resizing {} files.\nSaved to directory: `{}`",
        summary.processed,
        summary.output.display()
    );
    Ok(())
}
