//! A library for encoding axiom pinpointing problems for MaxSAT solvers, and for extracting the modules those solvers report.
//!
//! Axiom pinpointing asks which minimal sets of axioms of an ontology (justifications) are responsible for some consequence.
//! A reasoner encodes the derivation of consequences as a formula in conjunctive normal form, in which each axiom is named by a literal.
//! Given such a formula and a query literal, pinpoint sits between the reasoner and a MaxSAT solver:
//!
//! 1. The [encoder](crate::procedures::encode) writes a weighted formula in which the formula is hard, the query is forced false, and each assumption (axiom) is soft.
//!    Minimal correction sets of the weighted formula are then minimal sets of axioms from which the query follows.
//! 2. The [extractor](crate::procedures::extract) takes a module reported by the solver, as a list of axiom identifiers, and writes those axioms as an ontology fragment for the reasoner to verify.
//!    Alongside, an [index map](crate::structures::index_map) correlates the position of each axiom in the fragment with its original identifier.
//!
//! Both are batch transformations with no state held between calls, so separate calls may run concurrently without coordination.
//!
//! # Orientation
//!
//! - [Readers](crate::builder) for each input.
//! - The [structures] read and written.
//! - The [procedures] which transform them.
//! - The [configuration](crate::config), with a [Config](crate::config::Config) read by both procedures.
//! - [Errors](crate::types::err), each of which aborts the procedure where found.
//!
//! # Examples
//!
//! + Encode a formula with two assumptions.
//!
//! ```rust
//! # use pinpoint::config::{AssumptionMode, Config};
//! # use pinpoint::procedures::encode::encode;
//! let mut config = Config::default();
//! config.assumption_mode.value = AssumptionMode::Coi;
//!
//! let cnf = "1 2 0\n-1 3 0\n";
//! let assumptions = "2 3 0\n";
//!
//! let encoding = encode(cnf.as_bytes(), assumptions.as_bytes(), 1, &config).unwrap();
//! assert_eq!(encoding.wcnf.top_var, 3);
//! assert_eq!(encoding.wcnf.hard_weight, 4);
//! assert_eq!(encoding.wcnf.clause_count(), 5);
//! ```
//!
//! + Extract a module, and trace a position in the fragment back to the original axiom.
//!
//! ```rust
//! # use pinpoint::config::Config;
//! # use pinpoint::procedures::extract::extract;
//! # use pinpoint::structures::axiom::AxiomId;
//! # use pinpoint::types::err::{self};
//! let gci = "5 (implies A B)\n5 (implies B A)\n8 (implies C A)\n";
//! let ri = "";
//!
//! let extraction = extract(gci.as_bytes(), ri.as_bytes(), "8 5 0".as_bytes(), &Config::default()).unwrap();
//! assert_eq!(extraction.fragment(), "(implies C A)\n(equivalent A B)\n");
//! assert_eq!(extraction.index_map.original_of(2), Ok(AxiomId(5)));
//!
//! let faulty = extract(gci.as_bytes(), ri.as_bytes(), "8 9 0".as_bytes(), &Config::default());
//! assert_eq!(
//!     faulty.unwrap_err(),
//!     err::ErrorKind::Extract(err::ExtractError::FaultyReference(AxiomId(9)))
//! );
//! ```

pub mod builder;
pub mod procedures;

pub mod config;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;
