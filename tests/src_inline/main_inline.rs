
use super::*;

#[test]
fn test_parse_run_defaults() {
    let cli = Cli::try_parse_from([
        "kira-surveyqc",
        "run",
        "--input",
        "survey.csv",
        "--out",
        "out",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Command::Run(args) => {
            assert_eq!(args.input, PathBuf::from("survey.csv"));
            assert_eq!(args.out, PathBuf::from("out"));
            assert!(args.instrument.is_none());
            assert_eq!(args.export_name, DEFAULT_EXPORT_NAME);
            assert!(!args.keep_columns);
        }
        Command::Instrument => panic!("expected run"),
    }
}

#[test]
fn test_parse_run_with_instrument_and_verbosity() {
    let cli = Cli::try_parse_from([
        "kira-surveyqc",
        "-vv",
        "run",
        "--input",
        "survey.csv.gz",
        "--out",
        "out",
        "--instrument",
        "custom.json",
        "--keep-columns",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::Run(args) => {
            assert_eq!(args.instrument, Some(PathBuf::from("custom.json")));
            assert!(args.keep_columns);
        }
        Command::Instrument => panic!("expected run"),
    }
}

#[test]
fn test_parse_run_requires_input() {
    assert!(Cli::try_parse_from(["kira-surveyqc", "run", "--out", "out"]).is_err());
}

#[test]
fn test_parse_instrument_command() {
    let cli = Cli::try_parse_from(["kira-surveyqc", "instrument"]).unwrap();
    assert!(matches!(cli.command, Command::Instrument));
}

#[test]
fn test_resolve_instrument_defaults_to_builtin() {
    let args = RunArgs {
        input: PathBuf::from("survey.csv"),
        out: PathBuf::from("out"),
        instrument: None,
        export_name: DEFAULT_EXPORT_NAME.to_string(),
        keep_columns: false,
    };
    let instrument = resolve_instrument(&args).unwrap();
    assert_eq!(instrument, builtin_instrument());
}
