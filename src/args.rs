use {
    std::env,
    crate::{
        form::FormState,
        util::Error
    }
};

pub struct ArgsRegular {
    pub form: FormState,
    pub verbose: bool
}

impl Default for ArgsRegular {
    fn default() -> ArgsRegular {
        ArgsRegular {
            form: FormState::default(),
            verbose: false
        }
    }
}

pub enum Args {
    Regular(ArgsRegular),
    Help,
    Version
}

impl Args {
    pub fn new() -> Result<Args, Error> {
        Args::parse(env::args().skip(1))
    }

    fn parse(raw: impl IntoIterator<Item = String>) -> Result<Args, Error> {
        let mut args = ArgsRegular::default();
        let mut raw = raw.into_iter();
        while let Some(arg) = raw.next() {
            if arg.starts_with('-') {
                if arg.starts_with("--") {
                    match &arg[..] {
                        "--help" => { return Ok(Args::Help); }
                        "--version" => { return Ok(Args::Version); }
                        "--verbose" => { args.verbose = true; }
                        "--topic" => { args.form.lesson_topic = value(&mut raw, &arg)?; }
                        "--district" => { args.form.district = value(&mut raw, &arg)?; }
                        "--grade-level" => { args.form.grade_level = value(&mut raw, &arg)?; }
                        "--subject-focus" => { args.form.subject_focus = value(&mut raw, &arg)?; }
                        "--custom-prompt" => { args.form.custom_prompt = value(&mut raw, &arg)?; }
                        // range checked at submission time, not here
                        "--num-slides" => { args.form.num_slides = value(&mut raw, &arg)?; }
                        _ => { return Err(Error::Args(format!("unknown option: {}", arg))); }
                    }
                } else {
                    for short_flag in arg.chars().skip(1) {
                        match short_flag {
                            'h' => { return Ok(Args::Help); }
                            'v' => { args.verbose = true; }
                            _ => { return Err(Error::Args(format!("unknown option: -{}", short_flag))); }
                        }
                    }
                }
            } else if args.form.lesson_topic.is_empty() {
                args.form.lesson_topic = arg;
            } else {
                return Err(Error::Args(format!("unexpected argument: {}", arg)));
            }
        }
        Ok(Args::Regular(args))
    }
}

fn value(raw: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, Error> {
    raw.next().ok_or_else(|| Error::Args(format!("missing value for {}", flag)))
}
