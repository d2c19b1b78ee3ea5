use readiness_quiz::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let app = match QuizApp::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("No se pudo cargar el quiz: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "GMAT Readiness Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let app = QuizApp::new()?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Fallo al arrancar eframe: {e:?}");
        }
    });
}
