use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::BalanceSlice;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 240;
const HOLE_RATIO: f64 = 0.6;

const PALETTE: [RGBColor; 3] = [
    RGBColor(12, 131, 218),
    RGBColor(45, 159, 237),
    RGBColor(117, 196, 245),
];

#[derive(Properties, PartialEq)]
pub struct DoughnutChartProps {
    pub slices: Vec<BalanceSlice>,
}

/// Per-account balance distribution, redrawn whenever the slices change
pub struct DoughnutChart {
    canvas_ref: NodeRef,
}

impl Component for DoughnutChart {
    type Message = ();
    type Properties = DoughnutChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().slices != old_props.slices {
            self.draw_chart(&ctx.props().slices);
        }
        false
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.draw_chart(&ctx.props().slices);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="doughnut-chart">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="doughnut-chart-canvas"
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl DoughnutChart {
    fn draw_chart(&self, slices: &[BalanceSlice]) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let Some(sizes) = slice_sizes(slices) else {
            let _ = root.present();
            return;
        };
        let colors = slice_colors(sizes.len());
        // Legend is off; the summary text sits next to the chart
        let labels = vec![String::new(); sizes.len()];

        let (width, height) = root.dim_in_pixel();
        let center = ((width / 2) as i32, (height / 2) as i32);
        let radius = f64::from(width.min(height)) * 0.45;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.donut_hole(radius * HOLE_RATIO);

        if root.draw(&pie).is_err() {
            return;
        }
        let _ = root.present();
    }
}

/// Non-negative slice sizes, or `None` when there is nothing to draw
fn slice_sizes(slices: &[BalanceSlice]) -> Option<Vec<f64>> {
    let sizes: Vec<f64> = slices.iter().map(|slice| slice.value.max(0.0)).collect();
    if sizes.iter().sum::<f64>() > 0.0 {
        Some(sizes)
    } else {
        None
    }
}

fn slice_colors(count: usize) -> Vec<RGBColor> {
    PALETTE.iter().copied().cycle().take(count).collect()
}
