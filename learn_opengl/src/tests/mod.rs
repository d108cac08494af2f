mod test_app;
mod test_time;
mod test_triangles;
mod test_windowing;
