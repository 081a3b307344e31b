use std::path::Path;

use anyhow::Result;
use snell::output;
use snell::render::render_svg;
use snell::settings;
use snell::simulator::Simulator;
use snell::sweep::Sweep;

fn main() -> Result<()> {
    env_logger::init();

    let settings = settings::load_config()?;
    println!("{}", settings);

    let simulator = Simulator::from_settings(&settings);
    let evaluation = simulator.evaluate();
    println!("{}", evaluation.refraction);

    if let Some(path) = &settings.svg {
        let svg = render_svg(&evaluation.diagram, &evaluation.refraction);
        output::write_svg(Path::new(path), &svg)?;
    }
    if let Some(path) = &settings.json {
        output::write_json(Path::new(path), &evaluation)?;
    }

    if let Some(num_angles) = settings.sweep {
        let mut sweep = Sweep::new(simulator.n1(), simulator.n2(), num_angles)?;
        sweep.solve();
        if let Some(onset) = sweep.tir_onset() {
            println!("Total internal reflection from {:.2}° in the sweep", onset);
        }
        sweep.writeup(Path::new(&settings.sweep_file))?;
    }

    Ok(())
}
