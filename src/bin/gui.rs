#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path, path::PathBuf};
use water_treatment_calculator::{
    config,
    fields::Field,
    format::{format_currency, format_fixed, format_int},
    i18n::{self, keys, Language, Translator},
    logging, report,
    session::Calculator,
    store::JsonFileStore,
};

/// 정수 설비 용량·비용 계산기 (GUI)
#[derive(Debug, Parser)]
#[command(name = "water_treatment_calculator", version, about)]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 표시 언어 (auto/ru/en/ko)
    #[arg(long, short = 'L')]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let (app_cfg, cfg_err) = config::load_with_fallback(&args.config);
    logging::init(&app_cfg.log_filter);
    if let Some(err) = cfg_err {
        tracing::warn!(path = %args.config.display(), error = %err, "설정을 읽지 못해 기본 설정으로 계속합니다");
    }
    let lang = i18n::resolve_language(args.lang.as_deref(), Some(app_cfg.language.as_str()));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([560.0, 900.0])
        .with_min_inner_size([420.0, 600.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let title = Translator::new(&lang).t(keys::APP_TITLE);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg, args.config, lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 표시용 시스템 폰트를 대체 글꼴로 등록한다. 키릴 문자는 기본 폰트로 충분하다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NotoSansKR-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/System/Library/Fonts/AppleSDGothicNeo.ttc"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        candidates.insert(0, Path::new(&windir).join("Fonts").join("malgun.ttf"));
    }
    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font file ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_fallback");
            return Ok(());
        }
    }
    Err("CJK font not found; Korean labels may not render.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_owned());
    }
    ctx.set_fonts(fonts);
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: Translator,
    calc: Calculator<JsonFileStore>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf, lang: String) -> Self {
        let tr = Translator::new_with_pack(&lang, Some(config.locale_dir.as_path()));
        let calc = Calculator::open(JsonFileStore::open(config.store_path.clone()));
        Self {
            config,
            config_path,
            tr,
            calc,
            status: None,
        }
    }

    fn switch_language(&mut self, lang: Language) {
        self.tr = Translator::new_with_pack(lang.as_code(), Some(self.config.locale_dir.as_path()));
        self.config.language = lang.as_code().to_string();
        if let Err(e) = self.config.save_to(&self.config_path) {
            tracing::warn!(error = %e, "언어 설정을 저장하지 못했습니다");
        }
    }

    fn export_report(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("water_treatment_report.txt")
            .save_file()
        else {
            return;
        };
        let text = report::render_text(self.calc.results(), &self.tr);
        self.status = Some(match fs::write(&path, text) {
            Ok(()) => self
                .tr
                .tf(keys::GUI_EXPORT_DONE, &[("path", path.display().to_string())]),
            Err(e) => self
                .tr
                .tf(keys::GUI_EXPORT_FAILED, &[("error", e.to_string())]),
        });
    }

    fn field_row(&mut self, ui: &mut egui::Ui, field: Field) {
        let b = field.bounds();
        let mut value = field.get(self.calc.inputs());
        ui.label(self.tr.t(&field.label_key()));
        let decimals = if field == Field::MembraneReplacementFraction {
            4
        } else if b.step < 1.0 {
            2
        } else {
            0
        };
        let response = ui.add(
            egui::DragValue::new(&mut value)
                .speed(b.step)
                .clamp_range(b.min..=b.max)
                .max_decimals(decimals),
        );
        if response.changed() {
            self.calc.set(field, value);
        }
        ui.end_row();
    }

    fn field_grid(&mut self, ui: &mut egui::Ui, id: &str, fields: &[Field]) {
        egui::Grid::new(id)
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for field in fields {
                    self.field_row(ui, *field);
                }
            });
    }

    fn results_ui(&self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        let lang = tr.language();
        let r = self.calc.results();

        ui.heading(tr.t(keys::SECTION_RESULTS));
        egui::Grid::new("results").num_columns(2).show(ui, |ui| {
            tile(ui, &tr.t(keys::RESULT_POPULATION), format_int(r.demand.population, lang));
            tile(
                ui,
                &tr.t(keys::RESULT_REQUIRED_M3H),
                format_fixed(r.demand.required_m3_per_h, 2),
            );
            tile(
                ui,
                &tr.t(keys::RESULT_REQUIRED_LH),
                format_int(r.demand.required_l_per_h, lang),
            );
        });
        ui.separator();

        ui.heading(tr.t(keys::SECTION_EQUIPMENT));
        let e = &r.equipment;
        egui::Grid::new("equipment").num_columns(2).show(ui, |ui| {
            tile(ui, &tr.t(keys::EQUIP_NF), format_int(e.nf_modules as f64, lang));
            tile(ui, &tr.t(keys::EQUIP_UF), format_int(e.uf_blocks as f64, lang));
            tile(ui, &tr.t(keys::EQUIP_UV), format_int(e.uv_units as f64, lang));
            tile(ui, &tr.t(keys::EQUIP_PUMPS), format_int(e.pumps as f64, lang));
            tile(ui, &tr.t(keys::EQUIP_CARBON), format_int(e.carbon_columns as f64, lang));
        });
        ui.separator();

        ui.heading(tr.t(keys::SECTION_COSTS));
        egui::Grid::new("costs").num_columns(2).show(ui, |ui| {
            tile(ui, &tr.t(keys::COST_CAPEX), format_currency(r.capex.total, lang));
            tile(ui, &tr.t(keys::COST_OPEX_5Y), format_currency(r.opex.total, lang));
            tile(ui, &tr.t(keys::COST_TCO), format_currency(r.tco, lang));
        });

        egui::CollapsingHeader::new(tr.t(keys::SECTION_OPEX_YEARS))
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("opex_years")
                    .num_columns(6)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label("");
                        for key in [
                            keys::OPEX_ENERGY,
                            keys::OPEX_REAGENTS,
                            keys::OPEX_MEMBRANES,
                            keys::OPEX_SERVICE,
                            keys::OPEX_TOTAL,
                        ] {
                            ui.strong(tr.t(key));
                        }
                        ui.end_row();
                        for y in &r.opex.years {
                            ui.label(tr.tf(keys::OPEX_YEAR, &[("year", y.year.to_string())]));
                            for v in [y.energy, y.reagents, y.membranes, y.service, y.total] {
                                ui.label(format_currency(v, lang));
                            }
                            ui.end_row();
                        }
                    });
            });

        egui::CollapsingHeader::new(tr.t(keys::SECTION_CAPEX_BREAKDOWN))
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("capex_lines")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for line in &r.capex.lines {
                            ui.label(tr.t(line.item.label_key()));
                            ui.label(format_int(line.quantity, lang));
                            ui.label(format_currency(line.cost, lang));
                            ui.end_row();
                        }
                    });
            });
    }
}

fn tile(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.strong(value);
    ui.end_row();
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                ui.label(self.tr.t(keys::GUI_LANGUAGE));
                let current = self.tr.language();
                let mut selected = current;
                egui::ComboBox::from_id_source("language")
                    .selected_text(current.native_name())
                    .show_ui(ui, |ui| {
                        for lang in Language::ALL {
                            ui.selectable_value(&mut selected, lang, lang.native_name());
                        }
                    });
                if selected != current {
                    self.switch_language(selected);
                }
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(self.tr.t(keys::GUI_EXPORT)).clicked() {
                    self.export_report();
                }
                if ui.button(self.tr.t(keys::GUI_RESET)).clicked() {
                    self.calc.reset();
                    self.status = Some(self.tr.t(keys::RESET_DONE));
                }
                ui.separator();
                ui.small(self.tr.t(keys::FOOTER));
            });
            if let Some(status) = &self.status {
                ui.small(status.as_str());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(self.tr.t(keys::SECTION_QUICK));
                self.field_grid(ui, "quick", &Field::QUICK);
                ui.small(self.tr.t(keys::SECTION_QUICK_HINT));
                ui.separator();

                self.results_ui(ui);
                ui.separator();

                let advanced_title = self.tr.t(keys::SECTION_ADVANCED);
                egui::CollapsingHeader::new(advanced_title)
                    .default_open(false)
                    .show(ui, |ui| {
                        self.field_grid(
                            ui,
                            "coefficients",
                            &[
                                Field::Occupancy,
                                Field::PeakHourFactor,
                                Field::SafetyFactor,
                                Field::NfModuleCapacity,
                            ],
                        );
                        let mut n_plus_one = self.calc.inputs().n_plus_one;
                        if ui
                            .checkbox(&mut n_plus_one, self.tr.t(keys::N_PLUS_ONE_LABEL))
                            .changed()
                        {
                            self.calc.set_n_plus_one(n_plus_one);
                        }
                        ui.separator();

                        ui.strong(self.tr.t(keys::SECTION_PRICES));
                        let prices: Vec<Field> = Field::ALL
                            .into_iter()
                            .filter(|f| f.store_key() == "prices")
                            .collect();
                        self.field_grid(ui, "prices", &prices);
                        ui.separator();

                        ui.strong(self.tr.t(keys::SECTION_QUANTITIES));
                        self.field_grid(
                            ui,
                            "quantities",
                            &[
                                Field::TankCount,
                                Field::StainlessLength,
                                Field::PexLength,
                                Field::RoomArea,
                            ],
                        );
                        ui.separator();

                        ui.strong(self.tr.t(keys::SECTION_OPEX_INPUTS));
                        let opex: Vec<Field> = Field::ALL
                            .into_iter()
                            .filter(|f| f.store_key() == "opex")
                            .collect();
                        self.field_grid(ui, "opex_inputs", &opex);
                    });
            });
        });
    }
}
