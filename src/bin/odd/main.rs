#![warn(
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unused_import_braces,
	unused_qualifications,
)]

extern crate odd;

use odd::Device;
use odd::mmc::MMCDevice;
use odd::mmc::data::features::feature_name;
use odd::mmc::data::features::profiles::profile_name;
use odd::scsi::SCSIDevice;
use odd::scsi::data::inquiry;
use odd::utils::hexdump;

#[macro_use]
extern crate clap;
use clap::{
	App,
	AppSettings,
	Arg,
	ArgMatches,
	SubCommand,
};

extern crate serde_json;

extern crate prettytable;
use prettytable::Table;
use prettytable::Row;
use prettytable::Cell;

extern crate log;
extern crate env_logger;
use log::LevelFilter;
use env_logger::Builder as LogBuilder;

fn arg_json() -> Arg<'static, 'static> {
	Arg::with_name("json")
		.long("json")
		.help("Export data in JSON format")
}

fn bool_to_flag(b: bool) -> &'static str {
	if b { "+" } else { "-" }
}

fn require_device(dev: &Option<Device>) -> &Device {
	dev.as_ref().unwrap_or_else(|| {
		// TODO show usage and whatnot
		eprint!("<device> is required\n");
		::std::process::exit(1);
	})
}

fn list(args: &ArgMatches) {
	let devs = Device::list_devices();

	if args.is_present("json") {
		print!("{}\n", serde_json::to_string(&devs).unwrap());
	} else {
		for dev in devs {
			print!("{}\n", dev.display());
		}
	}
}

fn info(dev: &Device, args: &ArgMatches) {
	let inquiry = dev.unit_inquiry().unwrap_or_else(|err| {
		eprint!("Cannot query the drive: {}\n", err);
		::std::process::exit(1);
	});

	if args.is_present("json") {
		print!("{}\n", serde_json::to_string(&inquiry).unwrap());
		return;
	}

	let or_unknown = |s: &Option<String>| s.as_ref().map(|s| s.to_string()).unwrap_or("(unknown)".to_string());

	print!("Vendor:   {}\n", or_unknown(&inquiry.vendor_id));
	print!("Model:    {}\n", or_unknown(&inquiry.product_id));
	print!("Firmware: {}\n", or_unknown(&inquiry.product_rev));
	print!("Type:     {}\n", inquiry::device_type_name(inquiry.peripheral_device_type));
}

fn features(dev: &Device, args: &ArgMatches) {
	let current_only = args.is_present("current");

	if args.is_present("dump") {
		let rt = if current_only { 0b01 } else { 0b00 };
		let (_sense, data) = dev.get_configuration(rt, 0).unwrap_or_else(|err| {
			eprint!("Cannot query the drive: {}\n", err);
			::std::process::exit(1);
		});
		print!("{}\n", hexdump(&data));
		return;
	}

	let config = dev.features(current_only).unwrap_or_else(|err| {
		eprint!("Cannot query the drive: {}\n", err);
		::std::process::exit(1);
	});

	if args.is_present("json") {
		print!("{}\n", serde_json::to_string(&config).unwrap());
		return;
	}

	print!("Current profile: {} ({:04x}h)\n\n", profile_name(config.current_profile), config.current_profile);

	let mut table = Table::new();
	table.set_format(*prettytable::format::consts::FORMAT_CLEAN);
	table.set_titles(Row::new(vec![
		Cell::new("code"),
		Cell::new("name"),
		Cell::new("ver").style_spec("r"),
		Cell::new("pers"),
		Cell::new("cur"),
	]));

	for f in &config.features {
		table.add_row(Row::new(vec![
			Cell::new(&format!("{:04x}h", f.header.feature_code)),
			Cell::new(feature_name(f.header.feature_code)),
			Cell::new(&format!("{}", f.header.version)).style_spec("r"),
			Cell::new(bool_to_flag(f.header.persistent)),
			Cell::new(bool_to_flag(f.header.current)),
		]));
	}

	table.printstd();
}

fn main() {
	let mut log = LogBuilder::new();

	let args = App::new("odd")
		.about("optical disc drive querying tool")
		.version(crate_version!())
		.setting(AppSettings::SubcommandRequired)
		.arg(Arg::with_name("debug")
			.short("d")
			.long("debug")
			.multiple(true)
			.help("Verbose output: set once to log actions, twice to also show raw data buffers\ncan also be set through env_logger's RUST_LOG env")
		)
		// `device` appears before the subcommand: if you poke at the same drive over and over again,
		// the part you keep editing stays at the end of the shell prompt
		.arg(Arg::with_name("device")
			.help("Device to query (e.g. /dev/sr0)")
			.index(1)
		)
		.subcommand(SubCommand::with_name("list")
			.about("Lists optical disc drives")
			.arg(arg_json())
		)
		.subcommand(SubCommand::with_name("info")
			.about("Prints drive identification")
			.arg(arg_json())
		)
		.subcommand(SubCommand::with_name("features")
			.about("Prints the feature set the drive reports")
			.arg(arg_json())
			.arg(Arg::with_name("current")
				.long("current")
				.help("Only ask for features marked current")
			)
			.arg(Arg::with_name("dump")
				.long("dump")
				.help("Hexdump the raw GET CONFIGURATION response instead of decoding it")
			)
		)
		.get_matches();

	if let Ok(var) = std::env::var("RUST_LOG") {
		log.parse(&var);
	}
	// -d takes precedence over RUST_LOG which some might export globally for some reasons
	log.filter(Some("odd"), {
		use self::LevelFilter::*;
		match args.occurrences_of("debug") {
			0 => Warn,
			1 => Info,
			_ => Debug,
		}
	});
	log.init();

	let dev = args.value_of("device").map(|path| Device::open(path).unwrap_or_else(|err| {
		eprint!("Cannot open {}: {}\n", path, err);
		::std::process::exit(1);
	}));

	match args.subcommand() {
		("list", Some(sargs)) => {
			if dev.is_some() {
				// TODO show usage and whatnot
				eprint!("<device> is redundant\n");
				::std::process::exit(1);
			}
			list(sargs)
		},
		("info", Some(sargs)) => info(require_device(&dev), sargs),
		("features", Some(sargs)) => features(require_device(&dev), sargs),
		// clap should not allow subcommands that do not exist
		_ => unreachable!(),
	}
}
