/*
 * A simple macro to kill a process with a specified exit code.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

/*
 * Usage:
 *
 * die!()   // exit with code 1
 * die!(2)  // exit with code 2
 * die!(1, "bad thing: {:?}", err); // print "intake: bad thing: ..." to stderr and exit 1
 */
macro_rules! die {
    () => {
        ::std::process::exit(1);
    };

    ($code:expr $(,)?) => {
        ::std::process::exit($code);
    };

    ($code:expr, $fmt:expr $(, $args:expr )* $(,)?) => {{
        eprint!("{}: ", $crate::config::PROG_NAME);
        eprintln!($fmt $( , $args )*);
        ::std::process::exit($code);
    }};
}

pub(crate) use die;
