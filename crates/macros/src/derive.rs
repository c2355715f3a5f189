//! Strenum derive macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use crate::attrs::{BoundArg, parse_enum_attrs, parse_repr, parse_variant_attrs};

pub fn derive_strenum(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
	let enum_name = &input.ident;
	let vis = &input.vis;

	let Data::Enum(data) = &input.data else {
		return Err(syn::Error::new_spanned(
			input,
			"Strenum can only be derived for enums",
		));
	};
	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"Strenum cannot be derived for generic enums",
		));
	}

	let mut errors: Option<syn::Error> = None;
	let mut push_error = |err: syn::Error| match &mut errors {
		Some(existing) => existing.combine(err),
		None => errors = Some(err),
	};

	let repr = match parse_repr(&input.attrs) {
		Ok(repr) => format_ident!("{}", repr),
		Err(err) => {
			push_error(err);
			format_ident!("Isize")
		}
	};
	let options = parse_enum_attrs(&input.attrs).unwrap_or_else(|err| {
		push_error(err);
		Default::default()
	});

	let type_name = enum_name.unraw().to_string();
	let mut enumerators = Vec::new();
	let mut begin_marker = None;
	let mut end_marker = None;

	for variant in &data.variants {
		let variant_name = &variant.ident;
		if !matches!(variant.fields, Fields::Unit) {
			push_error(syn::Error::new_spanned(
				variant,
				"Strenum can only be derived for fieldless enums",
			));
			continue;
		}

		let markers = match parse_variant_attrs(&variant.attrs) {
			Ok(markers) => markers,
			Err(err) => {
				push_error(err);
				continue;
			}
		};
		if markers.begin {
			if begin_marker.is_some() {
				push_error(syn::Error::new_spanned(
					variant_name,
					"only one variant can be marked #[strenum(begin)]",
				));
			}
			begin_marker = Some(variant_name);
		}
		if markers.end {
			if end_marker.is_some() {
				push_error(syn::Error::new_spanned(
					variant_name,
					"only one variant can be marked #[strenum(end)]",
				));
			}
			end_marker = Some(variant_name);
		}

		let spelled = variant_name.unraw().to_string();
		enumerators.push(quote! {
			::strenum::Enumerator::new(
				#enum_name::#variant_name as i128,
				::strenum::render_signature!(#type_name, #spelled),
			)
		});
	}

	let is_variant = |ident: &syn::Ident| data.variants.iter().any(|v| v.ident == *ident);
	let mut bound_tokens = |bound: &BoundArg| match bound {
		BoundArg::Variant(ident) => {
			if !is_variant(ident) {
				push_error(syn::Error::new_spanned(
					ident,
					format!("`{ident}` is not a variant of `{enum_name}`"),
				));
			}
			quote! { ::strenum::Bound::Enumerator(#enum_name::#ident as i128) }
		}
		BoundArg::Underlying(value) => quote! { ::strenum::Bound::Underlying(#value) },
	};

	let begin_override = options.begin.as_ref().map(&mut bound_tokens);
	let end_override = options.end.as_ref().map(&mut bound_tokens);

	if let Some(errors) = errors {
		return Err(errors);
	}

	let marker = |marker: Option<&syn::Ident>| match marker {
		Some(ident) => quote! { ::core::option::Option::Some(#enum_name::#ident as i128) },
		None => quote! { ::core::option::Option::None },
	};
	let begin_marker_tokens = marker(begin_marker);
	let end_marker_tokens = marker(end_marker);

	let begin_const = begin_override
		.as_ref()
		.map(|bound| quote! { const BEGIN: ::strenum::Bound = #bound; });
	let end_const = end_override
		.as_ref()
		.map(|bound| quote! { const END: ::strenum::Bound = #bound; });
	let searcher_const = options
		.searcher
		.as_ref()
		.map(|searcher| quote! { const SEARCHER: ::strenum::Searcher = ::strenum::Searcher::#searcher; });
	let max_const = options
		.max_search_size
		.as_ref()
		.map(|max| quote! { const MAX_SEARCH_SIZE: usize = #max; });

	// Only emit the table when both ends are known from the declaration;
	// otherwise evaluating it would fail the derive itself.
	let bounded = (begin_override.is_some() || begin_marker.is_some())
		&& (end_override.is_some() || end_marker.is_some());
	let bitflag = options.searcher.as_ref().is_some_and(|s| s == "Bitflag");
	let names_const = (bounded && !bitflag).then(|| {
		quote! {
			impl #enum_name {
				/// Names of the enumerators in the declared range, ascending by value.
				#vis const NAMES: &'static [&'static str] = &::strenum::names!(#enum_name);
			}
		}
	});

	Ok(quote! {
		impl ::strenum::Enumeration for #enum_name {
			const NAME: &'static str = #type_name;
			const REPR: ::strenum::Repr = ::strenum::Repr::#repr;
			const ENUMERATORS: &'static [::strenum::Enumerator] = &[#(#enumerators),*];
			const BEGIN_MARKER: ::core::option::Option<i128> = #begin_marker_tokens;
			const END_MARKER: ::core::option::Option<i128> = #end_marker_tokens;
		}

		impl ::strenum::EnumInformation for #enum_name {
			#begin_const
			#end_const
			#searcher_const
			#max_const
		}

		#names_const
	})
}
