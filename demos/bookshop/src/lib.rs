use wasm_bindgen::prelude::*;
use diorama_engine::*;

mod game;
mod shop;
use game::Bookshop;

diorama_web::export_scene!(Bookshop, "bookshop");
