/*

main.rs - Sidim demonstration program
Copyright (C) 2024  The Sidim Authors

This file is part of Sidim.

Sidim is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, version 3 of the License.

Sidim is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Sidim.  If not, see <https://www.gnu.org/licenses/>.

*/

use sidim::{
    constants,
    dimension::DimensionError,
    ecs::Registry,
    format::Formatter,
    quantity::Quantity,
    unit::UnitLiterals,
};
use tracing_subscriber::EnvFilter;

use self::textio::*;

mod textio {
    #[cfg(feature = "debug")]
    pub const COLOR_DBG: &str = "\x1b[1;34m";

    pub const COLOR_ERR: &str = "\x1b[1;31m";
    pub const COLOR_HEAD: &str = "\x1b[1m";
    pub const COLOR_RST: &str = "\x1b[m";

    pub const PRECISION: usize = 4;
}

struct Position(f64);
#[derive(Clone)]
struct Velocity(f64);

fn show(label: &str, q: &Quantity) {
    println!("{:>24}: {}", label, q.format(PRECISION));
    #[cfg(feature = "debug")]
    eprintln!("{}Debug:{} {:?}", COLOR_DBG, COLOR_RST, q);
}

fn report(result: Result<Quantity, DimensionError>, label: &str) {
    match result {
        Ok(q) => show(label, &q),
        Err(err) => eprintln!("{}Error:{} {}", COLOR_ERR, COLOR_RST, err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("{}--- Dimensional analysis ---{}", COLOR_HEAD, COLOR_RST);
    let mass = 70.0.kg();
    let velocity = 10.0.m() / 2.0.s();
    show("speed", &velocity);
    show("kinetic energy", &(0.5 * mass * velocity * velocity));
    show("1 kcal", &(1.0.kcal()));
    report(
        constants::C.powi(2).map(|c2| constants::M_E * c2),
        "rest energy of e-",
    );

    println!("\n{}--- Temperatures ---{}", COLOR_HEAD, COLOR_RST);
    report(100.0.degC() - 0.0.degC(), "100 degC - 0 degC");
    report(100.0.degC() + 0.0.degC(), "100 degC + 0 degC");

    println!("\n{}--- Rejected operations ---{}", COLOR_HEAD, COLOR_RST);
    report(10.0.m() + 2.0.s(), "10 m + 2 s");
    report(velocity.sqrt(), "sqrt(speed)");

    println!("\n{}--- Sparse-set storage ---{}", COLOR_HEAD, COLOR_RST);
    let mut reg = Registry::new();
    for i in 0..5 {
        reg.assign(i, Position(i as f64));
        if i % 2 == 0 {
            reg.assign(i, Velocity(1.5));
        }
    }
    reg.view2::<Position, Velocity>(|entity, pos, vel| {
        pos.0 += vel.0;
        println!("entity {} moved to {}", entity, pos.0);
    });
}
