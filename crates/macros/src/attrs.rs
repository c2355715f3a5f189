use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, UnOp};

/// Bound given in an enum-level `begin = ...` or `end = ...` option.
pub(crate) enum BoundArg {
	/// A variant of the enum being derived.
	Variant(syn::Ident),
	/// A raw underlying value.
	Underlying(i128),
}

/// Options from `#[strenum(...)]` on the enum itself.
#[derive(Default)]
pub(crate) struct EnumAttrs {
	pub begin: Option<BoundArg>,
	pub end: Option<BoundArg>,
	pub searcher: Option<syn::Ident>,
	pub max_search_size: Option<syn::LitInt>,
}

/// Sentinel markers from `#[strenum(...)]` on a variant.
#[derive(Default)]
pub(crate) struct VariantAttrs {
	pub begin: bool,
	pub end: bool,
}

const SEARCHERS: &[&str] = &["Sequential", "Bitflag"];

/// Representation idents accepted in `#[repr(...)]`, mapped to `strenum::Repr`.
const REPRS: &[(&str, &str)] = &[
	("i8", "I8"),
	("i16", "I16"),
	("i32", "I32"),
	("i64", "I64"),
	("i128", "I128"),
	("isize", "Isize"),
	("u8", "U8"),
	("u16", "U16"),
	("u32", "U32"),
	("u64", "U64"),
	("usize", "Usize"),
];

pub(crate) fn parse_enum_attrs(attrs: &[Attribute]) -> syn::Result<EnumAttrs> {
	let mut out = EnumAttrs::default();
	for attr in attrs.iter().filter(|a| a.path().is_ident("strenum")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("begin") {
				if out.begin.is_some() {
					return Err(meta.error("duplicate `begin` option"));
				}
				out.begin = Some(parse_bound(&meta.value()?.parse()?)?);
				Ok(())
			} else if meta.path.is_ident("end") {
				if out.end.is_some() {
					return Err(meta.error("duplicate `end` option"));
				}
				out.end = Some(parse_bound(&meta.value()?.parse()?)?);
				Ok(())
			} else if meta.path.is_ident("searcher") {
				let ident: syn::Ident = meta.value()?.parse()?;
				if !SEARCHERS.iter().any(|s| ident == s) {
					return Err(syn::Error::new(
						ident.span(),
						"searcher must be `Sequential` or `Bitflag`",
					));
				}
				out.searcher = Some(ident);
				Ok(())
			} else if meta.path.is_ident("max_search_size") {
				let lit: syn::LitInt = meta.value()?.parse()?;
				lit.base10_parse::<usize>()?;
				out.max_search_size = Some(lit);
				Ok(())
			} else {
				Err(meta.error("unknown strenum option"))
			}
		})?;
	}
	Ok(out)
}

pub(crate) fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
	let mut out = VariantAttrs::default();
	for attr in attrs.iter().filter(|a| a.path().is_ident("strenum")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("begin") {
				out.begin = true;
				Ok(())
			} else if meta.path.is_ident("end") {
				out.end = true;
				Ok(())
			} else {
				Err(meta.error("expected `begin` or `end`"))
			}
		})?;
	}
	Ok(out)
}

fn parse_bound(expr: &Expr) -> syn::Result<BoundArg> {
	match expr {
		Expr::Path(path) if path.qself.is_none() => path
			.path
			.get_ident()
			.cloned()
			.map(BoundArg::Variant)
			.ok_or_else(|| syn::Error::new_spanned(path, "expected a variant name")),
		Expr::Lit(ExprLit {
			lit: Lit::Int(lit), ..
		}) => Ok(BoundArg::Underlying(lit.base10_parse()?)),
		Expr::Unary(ExprUnary {
			op: UnOp::Neg(_),
			expr,
			..
		}) => match expr.as_ref() {
			Expr::Lit(ExprLit {
				lit: Lit::Int(lit), ..
			}) => Ok(BoundArg::Underlying(-lit.base10_parse::<i128>()?)),
			other => Err(syn::Error::new(other.span(), "expected an integer literal")),
		},
		other => Err(syn::Error::new(
			other.span(),
			"expected a variant name or an integer literal",
		)),
	}
}

/// Reads the integer representation from `#[repr(...)]`, defaulting to
/// `isize`.
pub(crate) fn parse_repr(attrs: &[Attribute]) -> syn::Result<&'static str> {
	let mut repr = "Isize";
	for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("u128") {
				return Err(meta.error("`u128` representations are not supported by Strenum"));
			}
			if let Some((_, variant)) = REPRS.iter().find(|(name, _)| meta.path.is_ident(name)) {
				repr = *variant;
			} else if meta.input.peek(syn::token::Paren) {
				// `align(N)` and friends.
				let args;
				syn::parenthesized!(args in meta.input);
				let _: proc_macro2::TokenStream = args.parse()?;
			}
			Ok(())
		})?;
	}
	Ok(repr)
}
