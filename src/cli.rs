use clap::{App, Arg, ArgMatches};

static VERSION: &str = "0.1.0";
static DESCRIPTION: &str = "Lists storage buckets visible to a named credential profile";
const PROFILE: &str = "profile";
const PROFILE_SHORT: &str = "p";
const REGION: &str = "region";
const REGION_SHORT: &str = "r";
pub(crate) const DEFAULT_PROFILE: &str = "S3ReadOnlyAccess";

fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("s3list")
        .version(VERSION)
        .about(DESCRIPTION)
        .arg(Arg::with_name(PROFILE)
            .short(PROFILE_SHORT)
            .long(PROFILE)
            .takes_value(true)
            .default_value(DEFAULT_PROFILE)
            .help("Credential profile resolved from the shared credentials file"))
        .arg(Arg::with_name(REGION)
            .short(REGION_SHORT)
            .long(REGION)
            .takes_value(true)
            .help("Region to address, taken from the environment when omitted"))
}

pub(crate) fn build_cli<'a>() -> ArgMatches<'a> {
    build_app().get_matches()
}

pub(crate) struct ListCmd {
    pub(crate) profile: String,
    pub(crate) region: Option<String>,
}

impl ListCmd {
    pub(crate) fn build(matches: &ArgMatches) -> Self {
        // safe to unwrap, the arg carries a default
        let profile = matches.value_of(PROFILE).unwrap().to_owned();
        let region = matches.value_of(REGION).map(str::to_owned);

        ListCmd { profile, region }
    }
}
